//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::Pane;
use crate::theme::Colors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const WIDTH_PERCENT: u16 = 60;
const HEIGHT_PERCENT: u16 = 70;
const MIN_WIDTH: u16 = 50;
const MIN_HEIGHT: u16 = 15;
const MAX_WIDTH: u16 = 80;
const MAX_HEIGHT: u16 = 35;

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the focused pane
    pub fn new(pane: Pane, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(pane);
        Self {
            content: Self::build_content(&sections, pane),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], pane: Pane) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Vehicle Configurator Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(pane.title().to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));
            lines.push(Line::from(""));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::styled("    ", Style::default()),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Number of content lines, used by tests and scroll math
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = overlay_area(parent);
        f.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help ")
            .title_bottom(Line::from(" Press ? or Esc to close ").centered())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::PRIMARY))
            .style(Style::default().bg(Colors::BG_PRIMARY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

/// Centered rectangle sized by percentage and clamped to min/max bounds
fn overlay_area(parent: Rect) -> Rect {
    let width = (parent.width * WIDTH_PERCENT / 100)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(parent.width);
    let height = (parent.height * HEIGHT_PERCENT / 100)
        .clamp(MIN_HEIGHT, MAX_HEIGHT)
        .min(parent.height);

    Rect {
        x: parent.x + (parent.width - width) / 2,
        y: parent.y + (parent.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_fits_small_terminal() {
        let parent = Rect::new(0, 0, 40, 10);
        let area = overlay_area(parent);
        assert_eq!(area.width, 40);
        assert_eq!(area.height, 10);
        assert_eq!((area.x, area.y), (0, 0));
    }

    #[test]
    fn test_overlay_is_centered_and_capped() {
        let parent = Rect::new(0, 0, 200, 60);
        let area = overlay_area(parent);
        assert_eq!(area.width, MAX_WIDTH);
        assert_eq!(area.height, MAX_HEIGHT);
        assert_eq!(area.x, 60);
        assert_eq!(area.y, 12);
    }

    #[test]
    fn test_content_lists_every_section() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(Pane::Vehicles, &ctx);
        let sections = ctx.get_help_content(Pane::Vehicles);
        let items: usize = sections.iter().map(|s| s.items.len()).sum();
        // header + current pane + two lines per section + one per item
        assert_eq!(overlay.line_count(), 4 + sections.len() * 3 + items);
    }
}
