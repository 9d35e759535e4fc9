//! Itemized build sheet

use super::format::{format_currency, format_line_price};
use super::pane_block;
use crate::app::{AppState, Pane};
use crate::logic::pricing::{line_price, LinePrice};
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Width of the price column, right aligned
const PRICE_WIDTH: usize = 12;

pub fn render_summary(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Pane::Summary;
    let block = pane_block(Pane::Summary.title(), focused);
    let session = &state.session;

    let Some(vehicle) = session.selected_vehicle() else {
        let empty = Paragraph::new(Span::styled("No vehicle selected", Styles::text_muted()))
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let view = session.view_mode();
    let pricing = session.pricing();
    // Label column fills whatever the borders and price column leave
    let label_width = usize::from(area.width.saturating_sub(2)).saturating_sub(PRICE_WIDTH + 1);

    let row = |label: &str, price: String, label_style: Style, price_style: Style| {
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", truncate(label, label_width), width = label_width),
                label_style,
            ),
            Span::styled(format!(" {:>width$}", price, width = PRICE_WIDTH), price_style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(vehicle.display_name(), Styles::title())),
        Line::from(Span::styled(vehicle.category_name().to_string(), Styles::text_muted())),
        Line::from(""),
        row(
            "Base Vehicle",
            format_currency(pricing.base(view)),
            Styles::text(),
            Styles::text_bold(),
        ),
    ];

    if session.selected_options().is_empty() {
        lines.push(Line::from(Span::styled("  No options selected", Styles::text_muted())));
    }
    for option in session.selected_options() {
        let price = line_price(option, view);
        let price_style = match price {
            LinePrice::NoCharge => Styles::no_charge(),
            LinePrice::Credit(_) => Styles::credit(),
            LinePrice::Charge(_) => Styles::text(),
        };
        lines.push(row(
            &format!("  {} {}", option.code, option.name),
            format_line_price(price),
            Styles::text(),
            price_style,
        ));
    }

    let options_total = pricing.options(view);
    lines.push(Line::from(""));
    lines.push(row(
        "Options Subtotal",
        format_currency(options_total),
        Styles::text(),
        if options_total.is_sign_negative() { Styles::credit() } else { Styles::text_bold() },
    ));
    lines.push(row(
        "Destination & Delivery",
        format_currency(pricing.destination_charge),
        Styles::text(),
        Styles::text_bold(),
    ));
    lines.push(Line::from(Span::styled(
        "-".repeat(label_width + PRICE_WIDTH + 1),
        Styles::text_muted(),
    )));
    lines.push(row(
        view.total_label(),
        format_currency(pricing.total(view)),
        Styles::total(),
        Styles::total(),
    ));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Cut `text` to at most `width` characters
fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Destination", 4), "Dest");
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("138\" WB", 4), "138\"");
    }
}
