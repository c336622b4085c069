//! Currency entity: persisted record plus session state.

use std::hash::{Hash, Hasher};

use ratewise_shared::CurrencyCode;
use rust_decimal::Decimal;

use super::conversion::Conversion;
use super::position::Position;
use super::record::CurrencyRecord;

/// A catalog currency as seen by the conversion engine.
///
/// Equality and hashing use the currency code only; use
/// [`Currency::deep_eq`] to compare rate, selection and position too.
#[derive(Debug, Clone)]
pub struct Currency {
    record: CurrencyRecord,
    is_focused: bool,
    conversion: Conversion,
}

impl Currency {
    /// Creates an unselected currency.
    #[must_use]
    pub fn new(code: CurrencyCode, exchange_rate: Decimal) -> Self {
        Self::from_record(CurrencyRecord::new(code, exchange_rate))
    }

    /// Wraps a persisted record with fresh session state.
    #[must_use]
    pub fn from_record(record: CurrencyRecord) -> Self {
        Self {
            record,
            is_focused: false,
            conversion: Conversion::new(),
        }
    }

    /// The currency code.
    #[must_use]
    pub fn code(&self) -> &CurrencyCode {
        &self.record.code
    }

    /// Units of this currency per one unit of the reference currency.
    #[must_use]
    pub fn exchange_rate(&self) -> Decimal {
        self.record.exchange_rate
    }

    /// Rank among selected currencies.
    #[must_use]
    pub fn position(&self) -> Position {
        self.record.position
    }

    /// Whether the currency is in the working set.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.record.is_selected
    }

    /// Whether the currency receives keyboard input.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// The live conversion buffer.
    #[must_use]
    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    /// Mutable access to the live conversion buffer.
    pub fn conversion_mut(&mut self) -> &mut Conversion {
        &mut self.conversion
    }

    /// The persisted attributes.
    #[must_use]
    pub fn record(&self) -> &CurrencyRecord {
        &self.record
    }

    /// Consumes the currency, keeping only the persisted attributes.
    #[must_use]
    pub fn into_record(self) -> CurrencyRecord {
        self.record
    }

    /// Compares code, rate, selection flag and position.
    #[must_use]
    pub fn deep_eq(&self, other: &Self) -> bool {
        self.record.code == other.record.code
            && self.record.exchange_rate == other.record.exchange_rate
            && self.record.is_selected == other.record.is_selected
            && self.record.position == other.record.position
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.record.position = position;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.record.is_selected = selected;
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.record.code == other.record.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record.code.hash(state);
    }
}

impl From<CurrencyRecord> for Currency {
    fn from(record: CurrencyRecord) -> Self {
        Self::from_record(record)
    }
}

/// Compact debug form, e.g. `{4 EUR F S}`.
///
/// Fields: position, trimmed code, `F` when focused, `S` when selected
/// (blank otherwise).
impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{{} {} {} {}}}",
            self.record.position,
            self.record.code.trimmed(),
            if self.is_focused { 'F' } else { ' ' },
            if self.record.is_selected { 'S' } else { ' ' },
        )
    }
}
