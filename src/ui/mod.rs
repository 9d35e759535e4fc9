//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title bar, status line and navigation bar
//! - `vehicles` - Base vehicle list
//! - `options` - Compatible options grouped by category
//! - `summary` - Itemized build sheet and totals
//! - `dealer` - Margin analysis and sales recommendations
//! - `format` - Currency and number formatting

pub mod dealer;
pub mod format;
mod header;
mod options;
mod summary;
mod vehicles;

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::Styles;
use crate::types::ViewMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the dealer panel under the summary in dealer view
const DEALER_PANEL_HEIGHT: u16 = 16;

/// Main UI renderer
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole screen for the current state
    pub fn render(&self, f: &mut Frame, state: &AppState, keybindings: &KeybindingContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Status
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_header(f, chunks[0], state);

        if state.session.is_loading() {
            self.render_loading(f, chunks[1]);
        } else {
            self.render_body(f, chunks[1], state);
        }

        header::render_status(f, chunks[2], state);
        let items = keybindings.get_nav_items(state.focus, state.session.is_loading());
        header::render_nav_bar(f, chunks[3], &items);

        if state.help_visible {
            HelpOverlay::new(state.focus, keybindings).render(f, f.area());
        }
    }

    fn render_loading(&self, f: &mut Frame, area: Rect) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let loading = Paragraph::new("Loading catalog...")
            .style(Styles::title())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::NONE));
        f.render_widget(loading, vertical[1]);
    }

    fn render_body(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(35), Constraint::Min(0)])
            .split(columns[0]);

        vehicles::render_vehicles(f, left[0], state);
        options::render_options(f, left[1], state);

        match state.session.view_mode() {
            ViewMode::Customer => summary::render_summary(f, columns[1], state),
            ViewMode::Dealer => {
                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(DEALER_PANEL_HEIGHT)])
                    .split(columns[1]);
                summary::render_summary(f, right[0], state);
                dealer::render_dealer_panel(f, right[1], state);
            }
        }
    }
}

/// Bordered pane block, highlighted when focused
fn pane_block(title: &str, focused: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(if focused { Styles::title() } else { Styles::text_muted() })
        .borders(Borders::ALL)
        .border_style(Styles::border(focused))
}
