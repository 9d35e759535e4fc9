//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the focused pane.

use crate::app::Pane;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    NextPane,
    PreviousPane,
    /// Select the vehicle or toggle the option under the cursor
    Select,
    ToggleView,
    Reset,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Unmodified bindings ignore Shift (terminals report `BackTab` and
    /// capitals with it) but never fire while Control is held.
    fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        if self.modifiers.is_empty() {
            !event.modifiers.contains(KeyModifiers::CONTROL)
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Pane-specific keybindings
    pane_bindings: HashMap<Pane, Vec<Keybinding>>,
    /// Global keybindings (available in all panes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            pane_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Tab, KeyAction::NextPane, "Tab", "Next pane"),
            Keybinding::new(KeyCode::BackTab, KeyAction::PreviousPane, "S-Tab", "Previous pane"),
            Keybinding::new(KeyCode::Char('v'), KeyAction::ToggleView, "V", "Customer/Dealer view"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "Reset configuration"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::new(KeyCode::Esc, KeyAction::Quit, "Esc", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        let list_nav = || {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Move up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Move down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Move up"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Move down"),
            ]
        };

        let mut vehicles = list_nav();
        vehicles.push(Keybinding::new(
            KeyCode::Enter,
            KeyAction::Select,
            "Enter",
            "Select vehicle",
        ));
        vehicles.push(Keybinding::new(
            KeyCode::Char(' '),
            KeyAction::Select,
            "Space",
            "Select vehicle",
        ));
        self.pane_bindings.insert(Pane::Vehicles, vehicles);

        let mut options = list_nav();
        options.push(Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Toggle option"));
        options.push(Keybinding::new(
            KeyCode::Char(' '),
            KeyAction::Select,
            "Space",
            "Toggle option",
        ));
        self.pane_bindings.insert(Pane::Options, options);

        self.pane_bindings.insert(Pane::Summary, Vec::new());
    }

    /// Get keybindings for a pane (includes global bindings)
    pub fn get_bindings(&self, pane: Pane) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(pane_bindings) = self.pane_bindings.get(&pane) {
            bindings.extend(pane_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Map a key press to an action in the focused pane
    pub fn resolve(&self, pane: Pane, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(pane)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, pane: Pane, loading: bool) -> Vec<NavBarItem> {
        let priority_actions: &[KeyAction] = if loading {
            &[KeyAction::Help, KeyAction::Quit]
        } else {
            match pane {
                Pane::Vehicles | Pane::Options => &[
                    KeyAction::NavigateUp,
                    KeyAction::Select,
                    KeyAction::NextPane,
                    KeyAction::ToggleView,
                    KeyAction::Reset,
                    KeyAction::Help,
                    KeyAction::Quit,
                ],
                Pane::Summary => &[
                    KeyAction::NextPane,
                    KeyAction::ToggleView,
                    KeyAction::Reset,
                    KeyAction::Help,
                    KeyAction::Quit,
                ],
            }
        };

        let bindings = self.get_bindings(pane);
        priority_actions
            .iter()
            .filter_map(|action| {
                let binding = bindings.iter().find(|b| b.action == *action)?;
                // Up/Down are shown as a single item
                if *action == KeyAction::NavigateUp {
                    Some(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    })
                } else {
                    Some(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    })
                }
            })
            .collect()
    }

    /// Get full help content for a pane (for help overlay)
    pub fn get_help_content(&self, pane: Pane) -> Vec<HelpSection> {
        let sections: [(&str, &[KeyAction]); 3] = [
            ("Navigation", &[
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::NextPane,
                KeyAction::PreviousPane,
            ]),
            ("Configuration", &[KeyAction::Select, KeyAction::ToggleView, KeyAction::Reset]),
            ("General", &[KeyAction::Help, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(pane);
        sections
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: (*title).to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
