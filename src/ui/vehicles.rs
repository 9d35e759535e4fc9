//! Base vehicle list

use super::format::{format_currency, format_number};
use super::pane_block;
use crate::app::{AppState, Pane};
use crate::theme::Styles;
use crate::types::ViewMode;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render_vehicles(f: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Pane::Vehicles;
    let block = pane_block(Pane::Vehicles.title(), focused);
    let session = &state.session;
    let vehicles = &session.catalog().vehicles;

    if vehicles.is_empty() {
        let message = match &state.load_error {
            Some(reason) => vec![
                Line::from(Span::styled("Catalog unavailable", Styles::error())),
                Line::from(""),
                Line::from(Span::styled(reason.clone(), Styles::text_muted())),
            ],
            None => vec![Line::from(Span::styled("No vehicles in catalog", Styles::text_muted()))],
        };
        let paragraph = Paragraph::new(message).block(block).wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
        return;
    }

    let view = session.view_mode();
    let selected_id = session.selected_vehicle().map(|v| &v.id);

    let items: Vec<ListItem> = vehicles
        .iter()
        .map(|vehicle| {
            let is_selected = selected_id == Some(&vehicle.id);
            let marker = if is_selected { "* " } else { "  " };
            let pricing = vehicle.base_pricing();
            let price = match view {
                ViewMode::Customer => pricing.suggested_retail,
                ViewMode::Dealer => pricing.dealer_invoice,
            };

            let mut spans = vec![
                Span::styled(
                    format!("{}{}", marker, vehicle.display_name()),
                    if is_selected { Styles::selected() } else { Styles::text() },
                ),
                Span::styled(format!("  {}", vehicle.category_name()), Styles::text_muted()),
            ];
            if let Some(gvwr) = vehicle.gvwr {
                spans.push(Span::styled(
                    format!("  {} lb GVWR", format_number(gvwr)),
                    Styles::text_muted(),
                ));
            }
            spans.push(Span::styled(format!("  {}", format_currency(price)), Styles::text_bold()));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { Styles::highlight() } else { Styles::text() });

    let mut list_state = ListState::default();
    list_state.select(Some(state.vehicle_cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}
