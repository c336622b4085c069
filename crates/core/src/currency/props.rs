//! Property-based tests for currency arithmetic.
//!
//! - Property 1: Half-up rounding to four places
//! - Property 2: Conversion buffer derivation

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::Conversion;
use super::service::{CurrencyService, DECIMAL_PLACES};

/// Strategy to generate amounts a user can type (0.0001 to 10^20).
fn typed_amount() -> impl Strategy<Value = Decimal> {
    (0i64..i64::MAX, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property 1.1: Conversion result never has more than 4 decimal places.
    #[test]
    fn prop_convert_rounds_to_4_decimals(
        amount in typed_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        if let Some(result) = CurrencyService::convert(amount, from_rate, to_rate) {
            prop_assert!(
                result.normalize().scale() <= DECIMAL_PLACES,
                "{} has more than 4 places",
                result
            );
        }
    }

    /// Property 1.2: Converting through an equal rate preserves the amount.
    #[test]
    fn prop_same_rate_preserves_amount(
        amount in typed_amount(),
        rate in positive_rate(),
    ) {
        let result = CurrencyService::convert(amount, rate, rate);
        prop_assert_eq!(result, Some(amount));
    }

    /// Property 1.3: Conversion is deterministic.
    #[test]
    fn prop_convert_is_deterministic(
        amount in typed_amount(),
        from_rate in positive_rate(),
        to_rate in positive_rate(),
    ) {
        prop_assert_eq!(
            CurrencyService::convert(amount, from_rate, to_rate),
            CurrencyService::convert(amount, from_rate, to_rate)
        );
    }

    /// Property 1.4: Rounding moves a value by at most half a unit in the
    /// fourth place.
    #[test]
    fn prop_round_error_is_bounded(
        mantissa in -1_000_000_000_000i64..1_000_000_000_000i64,
        scale in 0u32..=10,
    ) {
        let value = Decimal::new(mantissa, scale);
        let rounded = CurrencyService::round(value, DECIMAL_PLACES);
        prop_assert!((rounded - value).abs() <= Decimal::new(5, 5));
    }

    /// Property 2.1: The rounded value is a pure function of the raw input.
    #[test]
    fn prop_rounded_value_derives_from_raw(amount in typed_amount()) {
        let raw = amount.to_string();
        let mut first = Conversion::new();
        first.set_raw_input("999");
        first.set_raw_input(raw.clone());
        let mut second = Conversion::new();
        second.set_raw_input(raw);
        prop_assert_eq!(first.rounded_value(), second.rounded_value());
        prop_assert_eq!(first.rounded_value(), Some(amount));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// 2.5 rounds to 3 (away from zero).
    #[test]
    fn test_half_up_2_5() {
        assert_eq!(CurrencyService::round(dec!(2.5), 0), dec!(3));
    }

    /// 2.25 rounds to 2.3 at one decimal.
    #[test]
    fn test_half_up_2_25() {
        assert_eq!(CurrencyService::round(dec!(2.25), 1), dec!(2.3));
    }

    /// 0.00005 rounds to 0.0001 at four decimals.
    #[test]
    fn test_half_up_fourth_place() {
        assert_eq!(CurrencyService::round(dec!(0.00005), 4), dec!(0.0001));
    }
}
