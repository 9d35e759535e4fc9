//! Shared catalog builders for integration tests

#![allow(dead_code)]

use buildsheet::catalog::{
    BasePricing, Catalog, CategoryId, CategoryLabel, CompatibilityRule, OptionCategory, OptionId,
    OptionPricing, Vehicle, VehicleId, VehicleOption,
};
use rust_decimal::Decimal;

pub fn vehicle(id: &str, series: &str, wheelbase: u32, drivetrain: &str) -> Vehicle {
    Vehicle {
        id: VehicleId::from(id),
        series_code: series.to_string(),
        wheelbase,
        drivetrain: drivetrain.to_string(),
        gvwr: None,
        category: Some(CategoryLabel {
            name: "Cutaway".to_string(),
            code: Some("CUT".to_string()),
        }),
        pricing: None,
        is_active: true,
    }
}

pub fn priced_vehicle(
    id: &str,
    invoice: Decimal,
    retail: Decimal,
    destination: Decimal,
) -> Vehicle {
    Vehicle {
        pricing: Some(BasePricing {
            dealer_invoice: invoice,
            suggested_retail: retail,
            destination_charge: destination,
        }),
        ..vehicle(id, "E350", 138, "RWD")
    }
}

pub fn option(id: &str) -> VehicleOption {
    VehicleOption {
        id: OptionId::from(id),
        code: id.to_uppercase(),
        name: format!("Option {}", id),
        description: None,
        category_id: None,
        category: None,
        is_standard: false,
        is_package: false,
        is_limited_production: false,
        compatible_series: Vec::new(),
        pricing: None,
        is_active: true,
    }
}

pub fn priced_option(id: &str, invoice: Decimal, retail: Decimal) -> VehicleOption {
    VehicleOption {
        pricing: Some(OptionPricing {
            dealer_invoice: invoice,
            suggested_retail: retail,
            is_no_charge: false,
            is_credit: false,
        }),
        ..option(id)
    }
}

pub fn credit_option(id: &str, invoice: Decimal, retail: Decimal) -> VehicleOption {
    VehicleOption {
        pricing: Some(OptionPricing {
            dealer_invoice: invoice,
            suggested_retail: retail,
            is_no_charge: false,
            is_credit: true,
        }),
        ..option(id)
    }
}

pub fn in_category(mut option: VehicleOption, category: &str) -> VehicleOption {
    option.category_id = Some(CategoryId::from(category));
    option
}

pub fn for_series(mut option: VehicleOption, series: &[&str]) -> VehicleOption {
    option.compatible_series = series.iter().map(|s| s.to_string()).collect();
    option
}

pub fn category(id: &str, name: &str, display_order: i32) -> OptionCategory {
    OptionCategory {
        id: CategoryId::from(id),
        name: name.to_string(),
        code: None,
        display_order,
        is_active: true,
    }
}

pub fn series_rule(option_id: &str, series: &[&str]) -> CompatibilityRule {
    CompatibilityRule {
        option_id: OptionId::from(option_id),
        compatible_series_codes: series.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Two vehicles, a handful of options across two categories, one rule
pub fn sample_catalog() -> Catalog {
    use rust_decimal_macros::dec;

    Catalog {
        vehicles: vec![
            priced_vehicle("v1", dec!(30000), dec!(33000), dec!(1800)),
            Vehicle {
                pricing: Some(BasePricing {
                    dealer_invoice: dec!(33000),
                    suggested_retail: dec!(36500),
                    destination_charge: dec!(1800),
                }),
                ..vehicle("v2", "E450", 158, "RWD")
            },
        ],
        options: vec![
            in_category(priced_option("a", dec!(500), dec!(600)), "1"),
            in_category(credit_option("b", dec!(200), dec!(250)), "2"),
            in_category(for_series(priced_option("c", dec!(100), dec!(120)), &["E450"]), "1"),
            in_category(priced_option("d", dec!(50), dec!(60)), "2"),
        ],
        option_categories: vec![category("1", "Powertrain", 1), category("2", "Interior", 2)],
        compatibility_rules: vec![series_rule("d", &["E450"])],
    }
}
