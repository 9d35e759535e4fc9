//! Error handling module for buildsheet
//!
//! Provides the error type for the TUI loop and headless pricing, built on
//! thiserror. Session transitions have their own narrower error enum which
//! converts into [`ConfiguratorError`]. Catalog loading reports
//! `CatalogError`, which the binary wraps with `anyhow` context.

use crate::session::TransitionError;
use thiserror::Error;

/// Main error type for buildsheet
#[derive(Error, Debug)]
pub enum ConfiguratorError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration state machine rejected an event
    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A vehicle id that is not in the catalog
    #[error("Unknown vehicle: {0}")]
    UnknownVehicle(String),

    /// An option id that is not in the catalog
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// An option that cannot be fitted to the selected vehicle
    #[error("Option {option} is not compatible with vehicle {vehicle}")]
    Incompatible { option: String, vehicle: String },
}

/// Result type alias for buildsheet operations
pub type Result<T> = std::result::Result<T, ConfiguratorError>;

impl ConfiguratorError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create an unknown vehicle error
    pub fn unknown_vehicle(id: impl Into<String>) -> Self {
        Self::UnknownVehicle(id.into())
    }

    /// Create an unknown option error
    pub fn unknown_option(id: impl Into<String>) -> Self {
        Self::UnknownOption(id.into())
    }

    /// Create an incompatibility error
    pub fn incompatible(option: impl Into<String>, vehicle: impl Into<String>) -> Self {
        Self::Incompatible {
            option: option.into(),
            vehicle: vehicle.into(),
        }
    }
}
