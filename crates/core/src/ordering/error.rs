//! Selection error types.

use ratewise_shared::CurrencyCode;
use thiserror::Error;

/// Contract violations of the select/unselect operations.
///
/// These indicate a caller bug (the list handed in does not match the
/// selection state the operation requires) and are never user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The currency is already in the selected set.
    #[error("Currency {0} is already selected")]
    AlreadySelected(CurrencyCode),

    /// The currency is not in the selected set.
    #[error("Currency {0} is not selected")]
    NotSelected(CurrencyCode),

    /// The same code appears twice in the selected list.
    #[error("Currency {0} appears more than once in the selected list")]
    DuplicateCurrency(CurrencyCode),

    /// The selected positions are not exactly `0..n`.
    #[error("Selected positions are not contiguous from 0: {0:?}")]
    NonContiguousPositions(Vec<i32>),
}

impl SelectionError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySelected(_) => "ALREADY_SELECTED",
            Self::NotSelected(_) => "NOT_SELECTED",
            Self::DuplicateCurrency(_) => "DUPLICATE_CURRENCY",
            Self::NonContiguousPositions(_) => "NON_CONTIGUOUS_POSITIONS",
        }
    }
}
