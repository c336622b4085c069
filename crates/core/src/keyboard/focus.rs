//! The single-focus invariant of the selected list.

use ratewise_shared::CurrencyCode;
use tracing::debug;

use super::error::InputError;
use crate::currency::Currency;

/// Stateless helpers for the "exactly one focused currency" invariant.
pub struct FocusService;

impl FocusService {
    /// Index of the focused currency.
    ///
    /// Returns `Ok(None)` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoFocusedCurrency` for a non-empty list with no
    /// focus and `InputError::MultipleFocusedCurrencies` when several
    /// currencies are focused.
    pub fn focused_index(currencies: &[Currency]) -> Result<Option<usize>, InputError> {
        if currencies.is_empty() {
            return Ok(None);
        }
        let focused: Vec<usize> = currencies
            .iter()
            .enumerate()
            .filter(|(_, currency)| currency.is_focused())
            .map(|(index, _)| index)
            .collect();
        match focused.as_slice() {
            [index] => Ok(Some(*index)),
            [] => Err(InputError::NoFocusedCurrency(currencies.len())),
            many => Err(InputError::MultipleFocusedCurrencies(
                many.iter().map(|i| currencies[*i].code().clone()).collect(),
            )),
        }
    }

    /// Moves focus to the currency with the given code.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FocusNotSelected` if no selected currency in the
    /// list has that code.
    pub fn focus(code: &CurrencyCode, currencies: &[Currency]) -> Result<Vec<Currency>, InputError> {
        if !currencies
            .iter()
            .any(|currency| currency.code() == code && currency.is_selected())
        {
            return Err(InputError::FocusNotSelected(code.clone()));
        }
        debug!(code = %code, "Focus moved");
        Ok(currencies
            .iter()
            .cloned()
            .map(|mut currency| {
                let focused = currency.code() == code;
                currency.set_focused(focused);
                currency
            })
            .collect())
    }

    /// Restores the invariant on a list that may have lost it.
    ///
    /// A list with exactly one focused currency is returned unchanged.
    /// Otherwise focus goes to the lowest-ranked currency that was focused,
    /// or to the lowest-ranked currency overall when none was.
    #[must_use]
    pub fn ensure_focus(currencies: &[Currency]) -> Vec<Currency> {
        let mut result = currencies.to_vec();
        if result.iter().filter(|c| c.is_focused()).count() == 1 {
            return result;
        }
        let has_focus = result.iter().any(Currency::is_focused);
        let target = result
            .iter()
            .filter(|c| !has_focus || c.is_focused())
            .min_by_key(|c| c.position())
            .map(|c| c.code().clone());
        if let Some(target) = target {
            debug!(code = %target, "Focus restored");
            for currency in &mut result {
                let focused = *currency.code() == target;
                currency.set_focused(focused);
            }
        }
        result
    }
}
