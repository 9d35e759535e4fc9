//! Type-safe enums shared across the configurator
//!
//! String forms are provided by strum so the same values work for the CLI,
//! the settings file and on-screen labels.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Pricing perspective shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ViewMode {
    /// Suggested retail figures
    #[default]
    Customer,
    /// Dealer invoice figures plus margin analysis
    Dealer,
}

impl ViewMode {
    /// The other perspective
    pub const fn toggled(self) -> Self {
        match self {
            Self::Customer => Self::Dealer,
            Self::Dealer => Self::Customer,
        }
    }

    /// Label used in the header badge
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer View",
            Self::Dealer => "Dealer View",
        }
    }

    /// Label for the grand total line
    pub const fn total_label(self) -> &'static str {
        match self {
            Self::Customer => "Total MSRP",
            Self::Dealer => "Dealer Invoice",
        }
    }
}

/// Qualitative rating of a configuration's dealer margin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum MarginRating {
    #[strum(serialize = "Excellent")]
    Excellent,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Below Target")]
    BelowTarget,
}

/// The four catalog resources fetched at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CatalogResource {
    Vehicles,
    Options,
    OptionCategories,
    Compatibility,
}

impl CatalogResource {
    /// File name of this resource inside a catalog directory
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Vehicles => "vehicles.json",
            Self::Options => "options.json",
            Self::OptionCategories => "option_categories.json",
            Self::Compatibility => "compatibility.json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_view_mode_default_is_customer() {
        assert_eq!(ViewMode::default(), ViewMode::Customer);
    }

    #[test]
    fn test_view_mode_parse_is_case_insensitive() {
        assert_eq!("Dealer".parse::<ViewMode>().ok(), Some(ViewMode::Dealer));
        assert_eq!("customer".parse::<ViewMode>().ok(), Some(ViewMode::Customer));
        assert!("wholesale".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_mode_toggle_twice_is_identity() {
        for mode in ViewMode::iter() {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn test_margin_rating_display() {
        assert_eq!(MarginRating::BelowTarget.to_string(), "Below Target");
    }

    #[test]
    fn test_catalog_resource_file_names_are_distinct() {
        let names: std::collections::HashSet<_> =
            CatalogResource::iter().map(CatalogResource::file_name).collect();
        assert_eq!(names.len(), 4);
        assert_eq!(CatalogResource::OptionCategories.to_string(), "option_categories");
    }
}
