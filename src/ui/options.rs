//! Compatible options grouped by category

use super::format::format_line_price;
use super::pane_block;
use crate::app::{AppState, Pane};
use crate::logic::pricing::{line_price, LinePrice};
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_options(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Pane::Options;
    let session = &state.session;

    let Some(vehicle) = session.selected_vehicle() else {
        let hint = Paragraph::new(Span::styled(
            "Select a vehicle to see available options",
            Styles::text_muted(),
        ))
        .block(pane_block(Pane::Options.title(), focused));
        f.render_widget(hint, area);
        return;
    };

    let groups = state.option_groups();
    let title = format!("{} for {}", Pane::Options.title(), vehicle.display_name());
    let block = pane_block(&title, focused);

    if groups.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No options fit this vehicle",
            Styles::text_muted(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let view = session.view_mode();
    let mut items: Vec<ListItem> = Vec::new();
    let mut cursor_row = None;
    let mut index = 0;

    for group in &groups {
        items.push(ListItem::new(Line::from(Span::styled(
            group.name.clone(),
            Styles::category(),
        ))));

        for option in &group.options {
            let is_selected = session.is_selected(&option.id);
            let checkbox = if is_selected { "[x]" } else { "[ ]" };
            let price = line_price(option, view);
            let price_style = match price {
                LinePrice::NoCharge => Styles::no_charge(),
                LinePrice::Credit(_) => Styles::credit(),
                LinePrice::Charge(_) => Styles::text_bold(),
            };

            let mut spans = vec![
                Span::styled(
                    format!("  {} {:<5} {}", checkbox, option.code, option.name),
                    if is_selected { Styles::selected() } else { Styles::text() },
                ),
            ];
            for badge in option.badges() {
                spans.push(Span::styled(format!(" [{}]", badge), Styles::badge()));
            }
            spans.push(Span::styled(format!("  {}", format_line_price(price)), price_style));

            if index == state.option_cursor {
                cursor_row = Some(items.len());
            }
            items.push(ListItem::new(Line::from(spans)));
            index += 1;
        }
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { Styles::highlight() } else { Styles::text() });

    let mut list_state = ListState::default();
    list_state.select(cursor_row);
    f.render_stateful_widget(list, area, &mut list_state);
}
