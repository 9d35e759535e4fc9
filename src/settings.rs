//! Application settings file handling.
//!
//! Settings are optional: a missing file yields the defaults, and CLI flags
//! override whatever the file says.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Default location of the catalog export directory
pub const DEFAULT_CATALOG_DIR: &str = "data/catalog";

/// Runtime settings for the configurator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the four catalog JSON exports
    pub catalog_dir: PathBuf,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_level: String,
    /// Where the TUI writes logs; without it TUI logs are discarded
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Load from `path` if it exists, else fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Replace the catalog directory when one was given on the command line
    pub fn with_catalog_override(mut self, catalog: Option<PathBuf>) -> Self {
        if let Some(dir) = catalog {
            self.catalog_dir = dir;
        }
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.catalog_dir.as_os_str().is_empty() {
            anyhow::bail!("catalog_dir must be specified");
        }

        if self.log_level.trim().is_empty() {
            anyhow::bail!("log_level must be specified");
        }
        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log_level {:?}", self.log_level))?;

        if let Some(file) = &self.log_file {
            if file.as_os_str().is_empty() {
                anyhow::bail!("log_file must not be empty when set");
            }
        }

        Ok(())
    }
}
