//! Centralized theme and styling for the TUI
//!
//! All colors and styles used by the configurator panes live here rather
//! than being hardcoded in render functions.
//!
//! # Usage
//! ```rust
//! use buildsheet::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Overlay background
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // Pricing Colors
    // -------------------------------------------------------------------------

    /// Credit lines and negative subtotals
    pub const CREDIT: Color = Color::Green;

    /// No-charge badge
    pub const NO_CHARGE: Color = Color::LightBlue;

    /// Grand total line
    pub const TOTAL: Color = Color::Cyan;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused pane border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused pane border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Category header color
    pub const CATEGORY: Color = Color::Yellow;

    /// Option flag badges
    pub const BADGE: Color = Color::Magenta;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted/secondary text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Bold text
    pub fn text_bold() -> Style {
        Style::default()
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Category header (yellow)
    pub fn category() -> Style {
        Style::default()
            .fg(Colors::CATEGORY)
            .add_modifier(Modifier::BOLD)
    }

    /// Pane border, brighter when the pane has focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Cursor row in a list
    pub fn highlight() -> Style {
        Style::default()
            .bg(Colors::INFO)
            .fg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Item that is part of the configuration
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn credit() -> Style {
        Style::default().fg(Colors::CREDIT)
    }

    pub fn no_charge() -> Style {
        Style::default().fg(Colors::NO_CHARGE)
    }

    pub fn badge() -> Style {
        Style::default().fg(Colors::BADGE)
    }

    /// Grand total line
    pub fn total() -> Style {
        Style::default()
            .fg(Colors::TOTAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Key hint in the navigation bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}
