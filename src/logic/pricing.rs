//! Pricing Aggregator
//!
//! Aggregates base vehicle and selected option prices into dealer invoice and
//! suggested retail totals.
//!
//! # Aggregation Rules
//!
//! | Input                     | Contribution |
//! |---------------------------|--------------|
//! | No vehicle                | everything is zero |
//! | Missing pricing record    | zero in every field |
//! | Credit option             | `-abs(price)` to the options subtotal |
//! | Any other option          | `price` as stored (no-charge is normally 0) |
//! | Destination charge        | added to each total exactly once |

use crate::catalog::{Vehicle, VehicleOption};
use crate::types::ViewMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized and total pricing for one configuration.
///
/// Both perspectives are computed together so the presentation can switch
/// view without recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingResult {
    pub base_invoice: Decimal,
    pub base_retail: Decimal,
    pub destination_charge: Decimal,
    pub options_invoice: Decimal,
    pub options_retail: Decimal,
    pub dealer_invoice: Decimal,
    pub suggested_retail: Decimal,
}

impl PricingResult {
    /// Base vehicle price in the given perspective
    pub fn base(&self, view: ViewMode) -> Decimal {
        match view {
            ViewMode::Customer => self.base_retail,
            ViewMode::Dealer => self.base_invoice,
        }
    }

    /// Options subtotal in the given perspective
    pub fn options(&self, view: ViewMode) -> Decimal {
        match view {
            ViewMode::Customer => self.options_retail,
            ViewMode::Dealer => self.options_invoice,
        }
    }

    /// Grand total in the given perspective
    pub fn total(&self, view: ViewMode) -> Decimal {
        match view {
            ViewMode::Customer => self.suggested_retail,
            ViewMode::Dealer => self.dealer_invoice,
        }
    }
}

/// Price a configuration.
///
/// # Returns
///
/// An all-zero [`PricingResult`] when `vehicle` is `None`.
pub fn compute_pricing(vehicle: Option<&Vehicle>, selected: &[VehicleOption]) -> PricingResult {
    let Some(vehicle) = vehicle else {
        return PricingResult::default();
    };

    let base = vehicle.base_pricing();

    let (options_invoice, options_retail) =
        selected
            .iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(invoice, retail), option| {
                let (i, r) = contribution(option);
                (invoice + i, retail + r)
            });

    PricingResult {
        base_invoice: base.dealer_invoice,
        base_retail: base.suggested_retail,
        destination_charge: base.destination_charge,
        options_invoice,
        options_retail,
        dealer_invoice: base.dealer_invoice + options_invoice + base.destination_charge,
        suggested_retail: base.suggested_retail + options_retail + base.destination_charge,
    }
}

/// Signed (invoice, retail) contribution of one option
fn contribution(option: &VehicleOption) -> (Decimal, Decimal) {
    let pricing = option.option_pricing();
    if pricing.is_credit {
        (-pricing.dealer_invoice.abs(), -pricing.suggested_retail.abs())
    } else {
        (pricing.dealer_invoice, pricing.suggested_retail)
    }
}

/// How a single option line is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePrice {
    /// Zero price impact, shown distinctly from a zero-priced regular option
    NoCharge,
    /// Reduces the total by this (non-negative) amount
    Credit(Decimal),
    /// Adds this amount
    Charge(Decimal),
}

/// Per-option display price in the given perspective.
pub fn line_price(option: &VehicleOption, view: ViewMode) -> LinePrice {
    let pricing = option.option_pricing();
    let price = match view {
        ViewMode::Customer => pricing.suggested_retail,
        ViewMode::Dealer => pricing.dealer_invoice,
    };

    if pricing.is_no_charge {
        LinePrice::NoCharge
    } else if pricing.is_credit {
        LinePrice::Credit(price.abs())
    } else {
        LinePrice::Charge(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BasePricing, OptionId, OptionPricing, VehicleId};
    use rust_decimal_macros::dec;

    fn priced_vehicle() -> Vehicle {
        Vehicle {
            id: VehicleId::from("v1"),
            series_code: "E350".to_string(),
            wheelbase: 138,
            drivetrain: "RWD".to_string(),
            gvwr: None,
            category: None,
            pricing: Some(BasePricing {
                dealer_invoice: dec!(30000),
                suggested_retail: dec!(33000),
                destination_charge: dec!(1800),
            }),
            is_active: true,
        }
    }

    fn priced_option(id: &str, invoice: Decimal, retail: Decimal, credit: bool) -> VehicleOption {
        VehicleOption {
            id: OptionId::from(id),
            code: id.to_uppercase(),
            name: id.to_string(),
            description: None,
            category_id: None,
            category: None,
            is_standard: false,
            is_package: false,
            is_limited_production: false,
            compatible_series: Vec::new(),
            pricing: Some(OptionPricing {
                dealer_invoice: invoice,
                suggested_retail: retail,
                is_no_charge: false,
                is_credit: credit,
            }),
            is_active: true,
        }
    }

    #[test]
    fn test_no_vehicle_is_all_zero() {
        let a = priced_option("a", dec!(500), dec!(600), false);
        assert_eq!(compute_pricing(None, &[a]), PricingResult::default());
    }

    #[test]
    fn test_credit_uses_absolute_value_regardless_of_sign() {
        let positive = priced_option("p", dec!(200), dec!(250), true);
        let negative = priced_option("n", dec!(-200), dec!(-250), true);
        let v = priced_vehicle();
        assert_eq!(
            compute_pricing(Some(&v), &[positive]),
            compute_pricing(Some(&v), &[negative])
        );
    }

    #[test]
    fn test_destination_applied_once() {
        let v = priced_vehicle();
        let options: Vec<_> = (0..5)
            .map(|i| priced_option(&i.to_string(), dec!(10), dec!(20), false))
            .collect();
        let pricing = compute_pricing(Some(&v), &options);
        assert_eq!(pricing.dealer_invoice, dec!(31850));
        assert_eq!(pricing.suggested_retail, dec!(34900));
    }

    #[test]
    fn test_option_without_pricing_contributes_zero() {
        let v = priced_vehicle();
        let mut bare = priced_option("bare", Decimal::ZERO, Decimal::ZERO, false);
        bare.pricing = None;
        let pricing = compute_pricing(Some(&v), &[bare]);
        assert_eq!(pricing.options_invoice, Decimal::ZERO);
        assert_eq!(pricing.suggested_retail, dec!(34800));
    }

    #[test]
    fn test_perspective_accessors() {
        let v = priced_vehicle();
        let a = priced_option("a", dec!(500), dec!(600), false);
        let pricing = compute_pricing(Some(&v), &[a]);
        assert_eq!(pricing.base(ViewMode::Dealer), dec!(30000));
        assert_eq!(pricing.base(ViewMode::Customer), dec!(33000));
        assert_eq!(pricing.options(ViewMode::Dealer), dec!(500));
        assert_eq!(pricing.total(ViewMode::Customer), dec!(35400));
    }

    #[test]
    fn test_line_price_variants() {
        let charge = priced_option("a", dec!(500), dec!(600), false);
        assert_eq!(line_price(&charge, ViewMode::Customer), LinePrice::Charge(dec!(600)));
        assert_eq!(line_price(&charge, ViewMode::Dealer), LinePrice::Charge(dec!(500)));

        let credit = priced_option("b", dec!(-200), dec!(-250), true);
        assert_eq!(line_price(&credit, ViewMode::Customer), LinePrice::Credit(dec!(250)));

        let mut free = priced_option("c", Decimal::ZERO, Decimal::ZERO, false);
        if let Some(p) = free.pricing.as_mut() {
            p.is_no_charge = true;
        }
        assert_eq!(line_price(&free, ViewMode::Dealer), LinePrice::NoCharge);
    }
}
