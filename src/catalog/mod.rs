//! Catalog data model
//!
//! Vehicles, options, option categories and compatibility rules as delivered
//! by the catalog collaborator. Everything here is read-only once fetched.
//!
//! # Record shape
//!
//! The JSON mirrors the hosted backend rows, which are loose:
//!
//! - nested pricing records arrive as an object, a one-element array, `null`,
//!   or not at all; they are modelled as `Option<_>` with zero defaults
//! - numeric pricing fields and list constraints may be `null`
//! - ids may be strings or integers

mod de;
pub mod source;

pub use source::{load_catalog, CatalogError, CatalogSource, JsonCatalog};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Borrow the raw id
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                de::flexible_id(d).map(Self)
            }
        }
    };
}

catalog_id!(
    /// Identity of a base vehicle
    VehicleId
);
catalog_id!(
    /// Identity of a vehicle option
    OptionId
);
catalog_id!(
    /// Identity of an option category
    CategoryId
);

impl CategoryId {
    /// Ordering key: numeric ids by value, then any other id by text
    pub fn sort_key(&self) -> (bool, i64, &str) {
        match self.0.parse::<i64>() {
            Ok(n) => (false, n, ""),
            Err(_) => (true, 0, &self.0),
        }
    }
}

// ============================================================================
// Vehicles
// ============================================================================

/// Base vehicle pricing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BasePricing {
    #[serde(default, alias = "dealer_invoice_price", deserialize_with = "de::nullable")]
    pub dealer_invoice: Decimal,
    #[serde(default, alias = "suggested_retail_price", deserialize_with = "de::nullable")]
    pub suggested_retail: Decimal,
    #[serde(default, alias = "destination_delivery_charge", deserialize_with = "de::nullable")]
    pub destination_charge: Decimal,
}

/// Name and code of a category, as nested into vehicle/option rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLabel {
    #[serde(alias = "category_name")]
    pub name: String,
    #[serde(default, alias = "category_code")]
    pub code: Option<String>,
}

/// A purchasable base vehicle before options are added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub series_code: String,
    #[serde(alias = "wheelbase_inches")]
    pub wheelbase: u32,
    #[serde(alias = "drivetrain_type")]
    pub drivetrain: String,
    #[serde(default, alias = "gvwr_pounds")]
    pub gvwr: Option<u32>,
    #[serde(default, alias = "vehicle_categories")]
    pub category: Option<CategoryLabel>,
    #[serde(default, alias = "base_vehicle_pricing", deserialize_with = "de::first_record")]
    pub pricing: Option<BasePricing>,
    #[serde(default = "de::active")]
    pub is_active: bool,
}

impl Vehicle {
    /// Pricing record, zeroed when the catalog has none
    pub fn base_pricing(&self) -> BasePricing {
        self.pricing.unwrap_or_default()
    }

    /// Category name for grouping, `"Other"` when uncategorized
    pub fn category_name(&self) -> &str {
        self.category.as_ref().map_or("Other", |c| c.name.as_str())
    }

    /// Human-readable name, e.g. `E-350 138" WB RWD`
    ///
    /// Only the first occurrence of each series letter is rewritten.
    pub fn display_name(&self) -> String {
        let series = self
            .series_code
            .replacen('E', "E-", 1)
            .replacen('F', "50", 1)
            .replacen('K', "50 Stripped", 1);
        format!("{} {}\" WB {}", series, self.wheelbase, self.drivetrain)
    }
}

// ============================================================================
// Options
// ============================================================================

/// Option pricing record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionPricing {
    #[serde(default, alias = "dealer_invoice_price", deserialize_with = "de::nullable")]
    pub dealer_invoice: Decimal,
    #[serde(default, alias = "suggested_retail_price", deserialize_with = "de::nullable")]
    pub suggested_retail: Decimal,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_no_charge: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_credit: bool,
}

/// An add-on feature priced and toggled independently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleOption {
    pub id: OptionId,
    #[serde(alias = "option_code")]
    pub code: String,
    #[serde(alias = "option_name")]
    pub name: String,
    #[serde(default, alias = "option_description")]
    pub description: Option<String>,
    #[serde(default, alias = "option_category_id")]
    pub category_id: Option<CategoryId>,
    #[serde(default, alias = "option_categories")]
    pub category: Option<CategoryLabel>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_standard: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_package: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub is_limited_production: bool,
    #[serde(default, deserialize_with = "de::nullable")]
    pub compatible_series: Vec<String>,
    #[serde(default, alias = "vehicle_option_pricing", deserialize_with = "de::first_record")]
    pub pricing: Option<OptionPricing>,
    #[serde(default = "de::active")]
    pub is_active: bool,
}

impl VehicleOption {
    /// Pricing record, zeroed when the catalog has none
    pub fn option_pricing(&self) -> OptionPricing {
        self.pricing.unwrap_or_default()
    }

    pub fn is_credit(&self) -> bool {
        self.pricing.is_some_and(|p| p.is_credit)
    }

    pub fn is_no_charge(&self) -> bool {
        self.pricing.is_some_and(|p| p.is_no_charge)
    }

    /// Badge labels shown next to the option name
    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = Vec::new();
        if self.is_standard {
            badges.push("Standard");
        }
        if self.is_package {
            badges.push("Package");
        }
        if self.is_limited_production {
            badges.push("Limited");
        }
        badges
    }
}

/// Display grouping for options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionCategory {
    pub id: CategoryId,
    #[serde(alias = "category_name")]
    pub name: String,
    #[serde(default, alias = "category_code")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub display_order: i32,
    #[serde(default = "de::active")]
    pub is_active: bool,
}

// ============================================================================
// Compatibility rules
// ============================================================================

/// Restricts which vehicles an option may be paired with.
///
/// Each non-empty list is an allow-list for that vehicle attribute; an empty
/// list leaves the dimension unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompatibilityRule {
    pub option_id: OptionId,
    #[serde(default, deserialize_with = "de::nullable")]
    pub compatible_series_codes: Vec<String>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub compatible_wheelbases: Vec<u32>,
    #[serde(default, deserialize_with = "de::nullable")]
    pub compatible_drivetrains: Vec<String>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Everything fetched from the catalog collaborator for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub vehicles: Vec<Vehicle>,
    pub options: Vec<VehicleOption>,
    pub option_categories: Vec<OptionCategory>,
    pub compatibility_rules: Vec<CompatibilityRule>,
}

impl Catalog {
    /// True when nothing at all was loaded
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
            && self.options.is_empty()
            && self.option_categories.is_empty()
            && self.compatibility_rules.is_empty()
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    pub fn option(&self, id: &OptionId) -> Option<&VehicleOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&OptionCategory> {
        self.option_categories.iter().find(|c| &c.id == id)
    }

    /// Check referential integrity of the catalog.
    ///
    /// Nothing found here prevents a session from running: unknown references
    /// fall back to "Other" groupings and missing pricing prices as zero.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for vehicle in &self.vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                issues.push(CatalogIssue::DuplicateVehicle(vehicle.id.clone()));
            }
            if vehicle.pricing.is_none() {
                issues.push(CatalogIssue::VehicleWithoutPricing(vehicle.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                issues.push(CatalogIssue::DuplicateOption(option.id.clone()));
            }
            if let Some(category_id) = &option.category_id {
                if self.category(category_id).is_none() {
                    issues.push(CatalogIssue::UnknownCategory {
                        option: option.id.clone(),
                        category: category_id.clone(),
                    });
                }
            }
        }

        for rule in &self.compatibility_rules {
            if self.option(&rule.option_id).is_none() {
                issues.push(CatalogIssue::OrphanRule(rule.option_id.clone()));
            }
        }

        issues
    }
}

/// A referential-integrity finding from [`Catalog::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateVehicle(VehicleId),
    DuplicateOption(OptionId),
    VehicleWithoutPricing(VehicleId),
    UnknownCategory { option: OptionId, category: CategoryId },
    OrphanRule(OptionId),
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVehicle(id) => write!(f, "duplicate vehicle id {}", id),
            Self::DuplicateOption(id) => write!(f, "duplicate option id {}", id),
            Self::VehicleWithoutPricing(id) => {
                write!(f, "vehicle {} has no pricing record (prices as zero)", id)
            }
            Self::UnknownCategory { option, category } => {
                write!(f, "option {} references unknown category {}", option, category)
            }
            Self::OrphanRule(id) => {
                write!(f, "compatibility rule references unknown option {}", id)
            }
        }
    }
}
