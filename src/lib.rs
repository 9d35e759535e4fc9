//! buildsheet library
//!
//! Vehicle configuration and pricing: a catalog of base vehicles and
//! options, compatibility filtering, dealer/retail price aggregation and a
//! terminal UI on top.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod logic;
pub mod session;
pub mod settings;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{
    load_catalog, Catalog, CatalogError, CatalogIssue, CatalogSource, CompatibilityRule,
    JsonCatalog, OptionCategory, OptionId, Vehicle, VehicleId, VehicleOption,
};
pub use error::ConfiguratorError;
pub use logic::analysis::{MarginAnalysis, Recommendation};
pub use logic::compatibility::{compatible_options, group_by_category, is_compatible, OptionGroup};
pub use logic::pricing::{compute_pricing, line_price, LinePrice, PricingResult};
pub use session::{Configuration, Event, Session, TransitionError};
pub use settings::Settings;
pub use types::{CatalogResource, MarginRating, ViewMode};
