//! Currency service for conversion and rounding operations.
//!
//! Every rounded amount in the engine goes through [`CurrencyService::round`],
//! so the rounding mode is applied identically everywhere.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Fractional digits kept on every rounded amount.
pub const DECIMAL_PLACES: u32 = 4;

/// Rounding mode used by the engine: round half away from zero.
pub const ROUNDING_STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Currency service for conversion operations.
pub struct CurrencyService;

impl CurrencyService {
    /// Convert an amount between two currencies quoted against the same
    /// reference currency.
    ///
    /// Computes `amount * to_rate / from_rate` and rounds half-up to
    /// [`DECIMAL_PLACES`]. Returns `None` when `from_rate` is zero or the
    /// result does not fit a `Decimal`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ratewise_core::currency::CurrencyService;
    ///
    /// let result = CurrencyService::convert(dec!(10), dec!(1.0), dec!(0.9));
    /// assert_eq!(result, Some(dec!(9.0000)));
    /// ```
    #[must_use]
    pub fn convert(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> Option<Decimal> {
        if from_rate.is_zero() {
            return None;
        }
        amount
            .checked_mul(to_rate)?
            .checked_div(from_rate)
            .map(|converted| Self::round(converted, DECIMAL_PLACES))
    }

    /// Exchange rate from one currency to another, unrounded.
    #[must_use]
    pub fn cross_rate(from_rate: Decimal, to_rate: Decimal) -> Option<Decimal> {
        to_rate.checked_div(from_rate)
    }

    /// Round a decimal value half away from zero.
    #[must_use]
    pub fn round(value: Decimal, decimal_places: u32) -> Decimal {
        value.round_dp_with_strategy(decimal_places, ROUNDING_STRATEGY)
    }

    /// Parse a raw input buffer into an exact decimal.
    ///
    /// Accepts an optional leading `-`, ASCII digits and at most one `.`;
    /// a trailing `.` (as in `"12."`) is ignored. Returns `None` for empty
    /// or malformed input.
    #[must_use]
    pub fn parse_amount(raw: &str) -> Option<Decimal> {
        let unsigned = raw.strip_prefix('-').unwrap_or(raw);
        let unsigned = unsigned.strip_suffix('.').unwrap_or(unsigned);
        if unsigned.is_empty()
            || unsigned.bytes().filter(|b| *b == b'.').count() > 1
            || !unsigned.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        {
            return None;
        }
        let value = Decimal::from_str(unsigned).ok()?;
        Some(if raw.starts_with('-') { -value } else { value })
    }
}
