//! Persisted currency attributes.

use ratewise_shared::CurrencyCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::position::Position;

/// The part of a currency that is stored by a repository.
///
/// Session-only state (focus, the live conversion buffer) lives in
/// [`super::Currency`] and is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Currency code, the primary key.
    pub code: CurrencyCode,
    /// Units of this currency per one unit of the reference currency.
    pub exchange_rate: Decimal,
    /// Rank among selected currencies.
    #[serde(default)]
    pub position: Position,
    /// Whether the currency is in the working set.
    #[serde(default)]
    pub is_selected: bool,
}

impl CurrencyRecord {
    /// Creates an unselected catalog entry.
    #[must_use]
    pub const fn new(code: CurrencyCode, exchange_rate: Decimal) -> Self {
        Self {
            code,
            exchange_rate,
            position: Position::INVALID,
            is_selected: false,
        }
    }
}
