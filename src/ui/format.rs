//! Display formatting for money and measurements

use crate::logic::pricing::LinePrice;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole US dollars with thousands separators: `$34,800`, `-$250`
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let whole = rounded.abs().to_u128().unwrap_or_default();
    format!("{}${}", sign, group_thousands(whole))
}

/// Price column text for an option line
pub fn format_line_price(price: LinePrice) -> String {
    match price {
        LinePrice::NoCharge => "NC".to_string(),
        LinePrice::Credit(amount) => format!("-{}", format_currency(amount.abs())),
        LinePrice::Charge(amount) => format_currency(amount),
    }
}

/// Percentage at one decimal place: `8.6%`
pub fn format_percent(percent: Decimal) -> String {
    format!("{:.1}%", percent)
}

/// Plain integer with thousands separators: `10,050`
pub fn format_number(value: u32) -> String {
    group_thousands(u128::from(value))
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(format_currency(dec!(0)), "$0");
        assert_eq!(format_currency(dec!(950)), "$950");
        assert_eq!(format_currency(dec!(34800)), "$34,800");
        assert_eq!(format_currency(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn test_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(999.5)), "$1,000");
        assert_eq!(format_currency(dec!(999.49)), "$999");
        assert_eq!(format_currency(dec!(-0.4)), "$0");
    }

    #[test]
    fn test_negative_currency() {
        assert_eq!(format_currency(dec!(-250)), "-$250");
        assert_eq!(format_currency(dec!(-1500)), "-$1,500");
    }

    #[test]
    fn test_line_price() {
        assert_eq!(format_line_price(LinePrice::NoCharge), "NC");
        assert_eq!(format_line_price(LinePrice::Credit(dec!(-250))), "-$250");
        assert_eq!(format_line_price(LinePrice::Credit(dec!(250))), "-$250");
        assert_eq!(format_line_price(LinePrice::Charge(dec!(1195))), "$1,195");
    }

    #[test]
    fn test_percent_and_number() {
        assert_eq!(format_percent(dec!(8.6)), "8.6%");
        assert_eq!(format_percent(dec!(0)), "0.0%");
        assert_eq!(format_number(10050), "10,050");
        assert_eq!(format_number(999), "999");
    }
}
