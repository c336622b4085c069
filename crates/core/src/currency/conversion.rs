//! Live conversion state of a currency.

use rust_decimal::Decimal;

use super::service::{CurrencyService, DECIMAL_PLACES};
use crate::format::DecimalFormatter;

/// Per-session conversion buffer owned by a [`super::Currency`].
///
/// `raw_input` is the exact text typed so far. The rounded value and the
/// display text are derived from it; assigning `raw_input` performs no
/// validation, so transiently malformed strings such as `"12.34.56"` are
/// accepted and simply have no rounded value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    raw_input: String,
    rounded_value: Option<Decimal>,
    hint: Option<Decimal>,
}

impl Conversion {
    /// Creates an empty conversion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The exact text typed so far. Example: `"1234.5"`.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Replaces the raw input and recomputes the rounded value.
    pub fn set_raw_input(&mut self, raw_input: impl Into<String>) {
        self.raw_input = raw_input.into();
        self.rounded_value = CurrencyService::parse_amount(&self.raw_input)
            .map(|value| CurrencyService::round(value, DECIMAL_PLACES));
    }

    /// Empties the raw input.
    pub fn clear(&mut self) {
        self.set_raw_input(String::new());
    }

    /// Returns true when nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw_input.is_empty()
    }

    /// The raw input rounded to four places, `None` when empty or malformed.
    #[must_use]
    pub fn rounded_value(&self) -> Option<Decimal> {
        self.rounded_value
    }

    /// Stores a computed amount.
    ///
    /// The value is rounded to four places and its four-place text becomes
    /// the raw input (`9` -> `"9.0000"`).
    pub fn set_value(&mut self, value: Decimal) {
        let mut rounded = CurrencyService::round(value, DECIMAL_PLACES);
        rounded.rescale(DECIMAL_PLACES);
        self.set_raw_input(rounded.to_string());
    }

    /// Locale-grouped rendering of the raw input, empty when nothing is entered.
    /// Example: USA `1,234.5678`, France `1 234,5678`.
    #[must_use]
    pub fn display_text(&self, formatter: &DecimalFormatter) -> String {
        if self.raw_input.trim().is_empty() {
            String::new()
        } else {
            formatter.format(&self.raw_input)
        }
    }

    /// The hint value shown while nothing is entered.
    #[must_use]
    pub fn hint(&self) -> Option<Decimal> {
        self.hint
    }

    /// Sets the hint value shown while nothing is entered.
    pub fn set_hint(&mut self, hint: Decimal) {
        self.hint = Some(hint);
    }

    /// Locale-grouped rendering of the hint, empty when no hint is set.
    #[must_use]
    pub fn placeholder_text(&self, formatter: &DecimalFormatter) -> String {
        self.hint
            .map(|hint| formatter.format(&hint.to_string()))
            .unwrap_or_default()
    }
}
