//! Header, status line and navigation bar rendering

use crate::app::AppState;
use crate::components::keybindings::NavBarItem;
use crate::theme::{Colors, Styles};
use crate::types::ViewMode;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title bar with the current vehicle, option count and view badge
pub fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let session = &state.session;
    let vehicle = session
        .selected_vehicle()
        .map_or_else(|| "No vehicle selected".to_string(), |v| v.display_name());
    let option_count = session.selected_options().len();
    let view = session.view_mode();

    let view_style = match view {
        ViewMode::Customer => Style::default().fg(Colors::BG_PRIMARY).bg(Colors::PRIMARY),
        ViewMode::Dealer => Style::default().fg(Colors::BG_PRIMARY).bg(Colors::SECONDARY),
    }
    .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled("Vehicle Configurator", Styles::title()),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(vehicle, Styles::text_bold()),
        Span::styled("  |  ", Styles::text_muted()),
        Span::styled(
            format!("{} option{}", option_count, if option_count == 1 { "" } else { "s" }),
            Styles::text(),
        ),
        Span::styled("  ", Styles::text()),
        Span::styled(format!(" {} ", view.label()), view_style),
    ]);

    let header = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::PRIMARY)),
        )
        .alignment(Alignment::Left);
    f.render_widget(header, area);
}

/// One-line status message
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.load_error.is_some() {
        Styles::error()
    } else {
        Style::default().fg(Colors::FG_SECONDARY)
    };
    let status = Paragraph::new(format!(" {}", state.status_message)).style(style);
    f.render_widget(status, area);
}

/// Key hints for the focused pane
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Styles::nav_label()));
        }
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(item.action_label.clone(), Styles::nav_label()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
