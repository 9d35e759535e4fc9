//! Dealer margin analysis
//!
//! Profitability breakdown of a priced configuration, shown in dealer view.

use super::pricing::PricingResult;
use crate::types::MarginRating;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Margin percent above which a configuration is rated excellent
const EXCELLENT_ABOVE: Decimal = Decimal::from_parts(15, 0, 0, false, 0);
/// Margin percent above which a configuration is rated good
const GOOD_ABOVE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
/// Margin percent that fills the gauge
const GAUGE_FULL_AT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);
/// Fewer selected options than this triggers an upsell hint
const UPSELL_BELOW_OPTIONS: usize = 3;

/// Dealer-side breakdown of a [`PricingResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarginAnalysis {
    /// `suggested_retail - dealer_invoice`
    pub margin: Decimal,
    /// Margin as a percentage of suggested retail, one decimal place
    pub margin_percent: Decimal,
    pub base_margin: Decimal,
    pub base_margin_percent: Decimal,
    pub options_margin: Decimal,
    pub rating: MarginRating,
}

impl MarginAnalysis {
    pub fn from_pricing(pricing: &PricingResult) -> Self {
        let margin = pricing.suggested_retail - pricing.dealer_invoice;
        let base_margin = pricing.base_retail - pricing.base_invoice;
        let margin_percent = percent_of(margin, pricing.suggested_retail);

        Self {
            margin,
            margin_percent,
            base_margin,
            base_margin_percent: percent_of(base_margin, pricing.base_retail),
            options_margin: pricing.options_retail - pricing.options_invoice,
            rating: rate(margin_percent),
        }
    }

    /// Gauge fill 0..=100, saturating at a 20% margin
    pub fn gauge_percent(&self) -> u16 {
        let clamped = self.margin_percent.clamp(Decimal::ZERO, GAUGE_FULL_AT);
        let fill = (clamped / GAUGE_FULL_AT * Decimal::ONE_HUNDRED).round();
        fill.to_u16().unwrap_or(100)
    }

    /// Sales hints for this configuration
    pub fn recommendations(
        &self,
        pricing: &PricingResult,
        selected_options: usize,
    ) -> Vec<Recommendation> {
        let mut hints = Vec::new();
        if selected_options < UPSELL_BELOW_OPTIONS {
            hints.push(Recommendation::SuggestPopularOptions);
        }
        if self.margin_percent < GOOD_ABOVE {
            hints.push(Recommendation::BelowAverageMargin);
        }
        hints.push(Recommendation::FinancingEligible(pricing.suggested_retail));
        hints
    }
}

/// A sales hint shown on the dealer panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    SuggestPopularOptions,
    BelowAverageMargin,
    /// Carries the retail total that qualifies
    FinancingEligible(Decimal),
}

/// `part / whole * 100` at one decimal place with halves rounded up, 0 when
/// `whole` is not positive
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

fn rate(margin_percent: Decimal) -> MarginRating {
    if margin_percent > EXCELLENT_ABOVE {
        MarginRating::Excellent
    } else if margin_percent > GOOD_ABOVE {
        MarginRating::Good
    } else {
        MarginRating::BelowTarget
    }
}
