//! Human-readable price and reserve formatting

use num_format::{Locale, ToFormattedString};
use rust_decimal::{prelude::*, Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Prices above this magnitude are rounded and grouped for readability;
/// smaller prices keep their full precision.
const PRICE_FORMAT_THRESHOLD: Decimal = dec!(2);

/// Conditional price formatting: values above the threshold render as
/// two-decimal grouped strings, values at or below it render unchanged.
pub fn format_price(price: Decimal) -> String {
    if price > PRICE_FORMAT_THRESHOLD {
        format_grouped(price)
    } else {
        price.normalize().to_string()
    }
}

/// Rounds to two decimal places and groups the integer part en-US style
/// (`12345.6789` -> `"12,345.68"`). Applied unconditionally to reserves.
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Reserves and prices are non-negative, and a Decimal's 96-bit
    // mantissa always fits in u128.
    let units = rounded.trunc().to_u128().unwrap_or_default();
    let cents = ((rounded - rounded.trunc()) * dec!(100))
        .to_u128()
        .unwrap_or_default();

    format!("{}.{:02}", units.to_formatted_string(&Locale::en), cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_prices_keep_full_precision() {
        assert_eq!(format_price(dec!(0.333333333333)), "0.333333333333");
        assert_eq!(format_price(dec!(1.999999)), "1.999999");
    }

    #[test]
    fn threshold_is_exclusive() {
        // Exactly 2 is left alone, anything above is rounded and grouped
        assert_eq!(format_price(dec!(2)), "2");
        assert_eq!(format_price(dec!(2.0)), "2");
        assert_eq!(format_price(dec!(2.000001)), "2.00");
    }

    #[test]
    fn large_prices_are_rounded_and_grouped() {
        assert_eq!(format_price(dec!(12345.6789)), "12,345.68");
        assert_eq!(format_price(dec!(3)), "3.00");
        assert_eq!(format_price(dec!(1234567.891)), "1,234,567.89");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(format_price(dec!(2.005)), "2.01");
        assert_eq!(format_price(dec!(2.004)), "2.00");
    }

    #[test]
    fn grouped_formatting_ignores_the_threshold() {
        assert_eq!(format_grouped(dec!(0.5)), "0.50");
        assert_eq!(format_grouped(dec!(0)), "0.00");
        assert_eq!(format_grouped(dec!(1999.999)), "2,000.00");
    }
}
