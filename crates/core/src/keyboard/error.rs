//! Keyboard input error types.

use ratewise_shared::CurrencyCode;
use thiserror::Error;

/// Contract violations of the input pipeline.
///
/// A rejected keystroke is not an error; see [`super::InputOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Input arrived for a non-empty list with no focused currency.
    #[error("No focused currency among {0} selected currencies")]
    NoFocusedCurrency(usize),

    /// More than one currency is focused.
    #[error("Expected one focused currency, found {}", .0.len())]
    MultipleFocusedCurrencies(Vec<CurrencyCode>),

    /// Focus was requested for a currency that is not selected.
    #[error("Cannot focus {0}: it is not selected")]
    FocusNotSelected(CurrencyCode),
}

impl InputError {
    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NoFocusedCurrency(_) => "NO_FOCUSED_CURRENCY",
            Self::MultipleFocusedCurrencies(_) => "MULTIPLE_FOCUSED_CURRENCIES",
            Self::FocusNotSelected(_) => "FOCUS_NOT_SELECTED",
        }
    }
}
