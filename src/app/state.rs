//! Application state definitions
//!
//! Holds the configuration [`Session`] together with the presentation state
//! that only the TUI cares about: which pane has focus, list cursors, the
//! status line and the help overlay.

use crate::catalog::{Catalog, CatalogError, Vehicle, VehicleOption};
use crate::components::keybindings::KeyAction;
use crate::logic::compatibility::{group_by_category, OptionGroup};
use crate::session::{Event, Session};
use tracing::{info, warn};

/// The three panes of the configurator screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    #[default]
    Vehicles,
    Options,
    Summary,
}

impl Pane {
    pub const fn next(self) -> Self {
        match self {
            Self::Vehicles => Self::Options,
            Self::Options => Self::Summary,
            Self::Summary => Self::Vehicles,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Vehicles => Self::Summary,
            Self::Options => Self::Vehicles,
            Self::Summary => Self::Options,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Vehicles => "Vehicles",
            Self::Options => "Options",
            Self::Summary => "Build Summary",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration state machine
    pub session: Session,
    /// Pane receiving navigation keys
    pub focus: Pane,
    /// Cursor into `session.catalog().vehicles`
    pub vehicle_cursor: usize,
    /// Cursor into [`AppState::visible_options`]
    pub option_cursor: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Help overlay visibility
    pub help_visible: bool,
    /// Why the catalog could not be loaded, if it failed
    pub load_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Session::new())
    }
}

impl AppState {
    pub fn new(session: Session) -> Self {
        let status_message = if session.is_loading() {
            "Loading catalog...".to_string()
        } else {
            "Select a vehicle to begin".to_string()
        };
        Self {
            session,
            focus: Pane::default(),
            vehicle_cursor: 0,
            option_cursor: 0,
            status_message,
            help_visible: false,
            load_error: None,
        }
    }

    /// Feed the background catalog load result into the session
    pub fn finish_loading(&mut self, result: Result<Catalog, CatalogError>) {
        let event = match result {
            Ok(catalog) => {
                self.status_message = format!(
                    "Loaded {} vehicles and {} options",
                    catalog.vehicles.len(),
                    catalog.options.len()
                );
                Event::DataLoaded(catalog)
            }
            Err(e) => {
                let reason = e.to_string();
                self.status_message = format!("Catalog unavailable: {}", reason);
                self.load_error = Some(reason.clone());
                Event::LoadFailed(reason)
            }
        };
        if let Err(e) = self.session.apply(event) {
            warn!("Ignoring catalog result: {}", e);
        }
        self.vehicle_cursor = 0;
        self.option_cursor = 0;
    }

    /// Compatible options for the selected vehicle, grouped by category
    pub fn option_groups(&self) -> Vec<OptionGroup<'_>> {
        let compatible = self.session.compatible_options();
        group_by_category(&compatible, &self.session.catalog().option_categories)
    }

    /// Options in the order the options pane lists them
    pub fn visible_options(&self) -> Vec<&VehicleOption> {
        self.option_groups()
            .into_iter()
            .flat_map(|group| group.options)
            .collect()
    }

    /// Vehicle under the cursor
    pub fn highlighted_vehicle(&self) -> Option<&Vehicle> {
        self.session.catalog().vehicles.get(self.vehicle_cursor)
    }

    /// Option under the cursor
    pub fn highlighted_option(&self) -> Option<&VehicleOption> {
        self.visible_options().get(self.option_cursor).copied()
    }

    /// Apply a resolved key action. Returns true when the app should exit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        if self.help_visible {
            if matches!(action, KeyAction::Help | KeyAction::Quit) {
                self.help_visible = false;
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.help_visible = true,
            _ if self.session.is_loading() => {}
            KeyAction::NavigateUp => self.move_cursor(-1),
            KeyAction::NavigateDown => self.move_cursor(1),
            KeyAction::NextPane => self.focus = self.focus.next(),
            KeyAction::PreviousPane => self.focus = self.focus.previous(),
            KeyAction::Select => self.activate(),
            KeyAction::ToggleView => self.toggle_view_mode(),
            KeyAction::Reset => self.reset(),
        }
        false
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Pane::Vehicles => {
                let len = self.session.catalog().vehicles.len();
                (&mut self.vehicle_cursor, len)
            }
            Pane::Options => {
                let len = self.visible_options().len();
                (&mut self.option_cursor, len)
            }
            Pane::Summary => return,
        };
        if len == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn activate(&mut self) {
        match self.focus {
            Pane::Vehicles => {
                let Some(vehicle) = self.highlighted_vehicle().cloned() else {
                    return;
                };
                let name = vehicle.display_name();
                self.dispatch(Event::SelectVehicle(vehicle));
                self.option_cursor = 0;
                self.focus = Pane::Options;
                self.status_message = format!("Selected {}", name);
            }
            Pane::Options => {
                let Some(option) = self.highlighted_option().cloned() else {
                    return;
                };
                let was_selected = self.session.is_selected(&option.id);
                let name = option.name.clone();
                if self.dispatch(Event::ToggleOption(option)) {
                    self.status_message = if was_selected {
                        format!("Removed {}", name)
                    } else {
                        format!("Added {}", name)
                    };
                }
            }
            Pane::Summary => {}
        }
    }

    /// Flip between customer and dealer pricing
    pub fn toggle_view_mode(&mut self) {
        let mode = self.session.view_mode().toggled();
        self.dispatch(Event::SetViewMode(mode));
        self.status_message = format!("Switched to {}", mode.label());
    }

    /// Discard the vehicle and all options
    pub fn reset(&mut self) {
        if self.session.configuration().is_blank() {
            return;
        }
        self.dispatch(Event::ClearConfiguration);
        self.option_cursor = 0;
        self.focus = Pane::Vehicles;
        self.status_message = "Configuration cleared".to_string();
        info!("Configuration reset by user");
    }

    fn dispatch(&mut self, event: Event) -> bool {
        match self.session.apply(event) {
            Ok(()) => true,
            Err(e) => {
                self.status_message = e.to_string();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_cycle() {
        let mut pane = Pane::Vehicles;
        for _ in 0..3 {
            pane = pane.next();
        }
        assert_eq!(pane, Pane::Vehicles);
        assert_eq!(Pane::Vehicles.previous(), Pane::Summary);
    }

    #[test]
    fn test_only_help_and_quit_while_loading() {
        let mut state = AppState::default();
        assert!(!state.handle_action(KeyAction::NextPane));
        assert_eq!(state.focus, Pane::Vehicles);
        assert!(!state.handle_action(KeyAction::Help));
        assert!(state.help_visible);
        // Quit closes help first
        assert!(!state.handle_action(KeyAction::Quit));
        assert!(!state.help_visible);
        assert!(state.handle_action(KeyAction::Quit));
    }

    #[test]
    fn test_cursor_stays_in_bounds_on_empty_lists() {
        let mut state = AppState::new(Session::with_catalog(Catalog::default()));
        state.handle_action(KeyAction::NavigateDown);
        assert_eq!(state.vehicle_cursor, 0);
        state.handle_action(KeyAction::NavigateUp);
        assert_eq!(state.vehicle_cursor, 0);
    }

    #[test]
    fn test_reset_on_blank_configuration_keeps_status() {
        let mut state = AppState::new(Session::with_catalog(Catalog::default()));
        state.reset();
        assert_eq!(state.status_message, "Select a vehicle to begin");
    }
}
