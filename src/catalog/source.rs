//! Catalog collaborator interface and loaders
//!
//! A [`CatalogSource`] answers four independent reads. [`load_catalog`]
//! issues all four concurrently on scoped threads and waits for every one of
//! them before returning, failing if any read failed.

use super::{Catalog, CompatibilityRule, OptionCategory, Vehicle, VehicleOption};
use crate::types::CatalogResource;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use std::panic;
use std::thread;
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised while fetching catalog resources
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The resource could not be read
    #[error("failed to read {resource} from {path:?}: {source}")]
    Read {
        resource: CatalogResource,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The resource was read but is not valid JSON for its record type
    #[error("failed to parse {resource} from {path:?}: {source}")]
    Parse {
        resource: CatalogResource,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source reported a failure of its own
    #[error("{resource} unavailable: {reason}")]
    Unavailable {
        resource: CatalogResource,
        reason: String,
    },
}

impl CatalogError {
    /// Which of the four resources failed
    pub fn resource(&self) -> CatalogResource {
        match self {
            Self::Read { resource, .. }
            | Self::Parse { resource, .. }
            | Self::Unavailable { resource, .. } => *resource,
        }
    }
}

/// The four read operations the configurator needs from its data backend.
///
/// Implementations return records already filtered to active rows and
/// sorted for display.
pub trait CatalogSource: Sync {
    fn vehicles(&self) -> Result<Vec<Vehicle>, CatalogError>;
    fn options(&self) -> Result<Vec<VehicleOption>, CatalogError>;
    fn option_categories(&self) -> Result<Vec<OptionCategory>, CatalogError>;
    fn compatibility_rules(&self) -> Result<Vec<CompatibilityRule>, CatalogError>;
}

/// An in-memory catalog serves itself verbatim.
impl CatalogSource for Catalog {
    fn vehicles(&self) -> Result<Vec<Vehicle>, CatalogError> {
        Ok(self.vehicles.clone())
    }

    fn options(&self) -> Result<Vec<VehicleOption>, CatalogError> {
        Ok(self.options.clone())
    }

    fn option_categories(&self) -> Result<Vec<OptionCategory>, CatalogError> {
        Ok(self.option_categories.clone())
    }

    fn compatibility_rules(&self) -> Result<Vec<CompatibilityRule>, CatalogError> {
        Ok(self.compatibility_rules.clone())
    }
}

/// Directory of JSON exports, one file per resource.
///
/// ```text
/// <dir>/vehicles.json
/// <dir>/options.json
/// <dir>/option_categories.json
/// <dir>/compatibility.json
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    dir: PathBuf,
}

impl JsonCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, resource: CatalogResource) -> Result<Vec<T>, CatalogError> {
        let path = self.dir.join(resource.file_name());
        debug!("Reading {} from {:?}", resource, path);

        let content = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
            resource,
            path: path.clone(),
            source,
        })?;

        // A `null` export is treated like an empty table
        let rows: Option<Vec<T>> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                resource,
                path,
                source,
            })?;
        Ok(rows.unwrap_or_default())
    }
}

impl CatalogSource for JsonCatalog {
    fn vehicles(&self) -> Result<Vec<Vehicle>, CatalogError> {
        let mut vehicles: Vec<Vehicle> = self.read(CatalogResource::Vehicles)?;
        vehicles.retain(|v| v.is_active);
        vehicles.sort_by(|a, b| a.series_code.cmp(&b.series_code));
        Ok(vehicles)
    }

    fn options(&self) -> Result<Vec<VehicleOption>, CatalogError> {
        let mut options: Vec<VehicleOption> = self.read(CatalogResource::Options)?;
        options.retain(|o| o.is_active);
        // Options without a category sort last
        options.sort_by(|a, b| match (&a.category_id, &b.category_id) {
            (Some(x), Some(y)) => x.sort_key().cmp(&y.sort_key()),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(options)
    }

    fn option_categories(&self) -> Result<Vec<OptionCategory>, CatalogError> {
        let mut categories: Vec<OptionCategory> = self.read(CatalogResource::OptionCategories)?;
        categories.retain(|c| c.is_active);
        categories.sort_by_key(|c| c.display_order);
        Ok(categories)
    }

    fn compatibility_rules(&self) -> Result<Vec<CompatibilityRule>, CatalogError> {
        self.read(CatalogResource::Compatibility)
    }
}

/// Fetch all four resources concurrently and assemble a [`Catalog`].
///
/// Every fetch runs to completion; the first failure (in resource order) is
/// returned.
/// A panicking fetch is re-raised on the calling thread.
pub fn load_catalog<S: CatalogSource + ?Sized>(source: &S) -> Result<Catalog, CatalogError> {
    info!("Loading catalog");

    let (vehicles, options, option_categories, compatibility_rules) = thread::scope(|s| {
        let vehicles = s.spawn(|| source.vehicles());
        let options = s.spawn(|| source.options());
        let categories = s.spawn(|| source.option_categories());
        let rules = s.spawn(|| source.compatibility_rules());

        (
            vehicles.join().unwrap_or_else(|panic| panic::resume_unwind(panic)),
            options.join().unwrap_or_else(|panic| panic::resume_unwind(panic)),
            categories.join().unwrap_or_else(|panic| panic::resume_unwind(panic)),
            rules.join().unwrap_or_else(|panic| panic::resume_unwind(panic)),
        )
    });

    let catalog = Catalog {
        vehicles: vehicles?,
        options: options?,
        option_categories: option_categories?,
        compatibility_rules: compatibility_rules?,
    };

    info!(
        "Catalog loaded: {} vehicles, {} options, {} categories, {} rules",
        catalog.vehicles.len(),
        catalog.options.len(),
        catalog.option_categories.len(),
        catalog.compatibility_rules.len()
    );
    Ok(catalog)
}
