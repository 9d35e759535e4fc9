//! Application module
//!
//! Contains the main application loop, background catalog loading and
//! keyboard dispatch.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, Pane)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppState, Pane};

use crate::catalog::{load_catalog, Catalog, CatalogError, CatalogSource};
use crate::components::keybindings::KeybindingContext;
use crate::error::Result;
use crate::session::Session;
use crate::types::CatalogResource;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// Message sent from the catalog loader thread to the main UI thread
#[derive(Debug)]
pub enum LoadMessage {
    Finished(std::result::Result<Catalog, CatalogError>),
}

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
    /// Receives the catalog once the loader thread finishes
    load_rx: Option<Receiver<LoadMessage>>,
}

impl App {
    /// Create the application and start loading the catalog in the background
    pub fn new<S>(source: S) -> Self
    where
        S: CatalogSource + Send + 'static,
    {
        info!("Creating new App instance");
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_catalog(&source);
            if tx.send(LoadMessage::Finished(result)).is_err() {
                debug!("UI exited before the catalog finished loading");
            }
        });

        Self {
            state: AppState::new(Session::new()),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            load_rx: Some(rx),
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Check the loader channel without blocking
    fn poll_catalog(&mut self) {
        let Some(rx) = &self.load_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(LoadMessage::Finished(result)) => {
                if let Err(e) = &result {
                    error!("Catalog load failed: {}", e);
                }
                self.state.finish_loading(result);
                self.load_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                error!("Catalog loader thread exited without a result");
                self.state.finish_loading(Err(CatalogError::Unavailable {
                    resource: CatalogResource::Vehicles,
                    reason: "loader thread exited".to_string(),
                }));
                self.load_rx = None;
            }
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            self.poll_catalog();

            if crossterm::event::poll(Duration::from_millis(50))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event) {
                        break;
                    }
                }
            }

            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.keybinding_context);
            })?;
        }

        info!("Main application loop finished");
        Ok(())
    }

    /// Handle keyboard input events. Returns true when exit was requested.
    fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if key_event.kind != KeyEventKind::Press {
            return false;
        }
        match self
            .keybinding_context
            .resolve(self.state.focus, &key_event)
        {
            Some(action) => {
                debug!("Key {:?} -> {:?}", key_event.code, action);
                self.state.handle_action(action)
            }
            None => false,
        }
    }
}
