//! Dense ordering of the selected currencies.
//!
//! Every operation takes the caller's selected list by reference and returns
//! new currencies; nothing is mutated in place.

use std::collections::HashSet;

use tracing::debug;

use super::error::SelectionError;
use crate::currency::{Currency, CurrencyRecord, Position};

/// Result of an unselect or remove-all operation.
#[derive(Debug, Clone, Default)]
pub struct SelectionChange {
    /// The currencies still selected, ordered by position.
    pub selected: Vec<Currency>,
    /// The currencies that left the selected set, with the invalid position.
    pub released: Vec<Currency>,
}

impl SelectionChange {
    /// Records to persist in one upsert: survivors and released currencies.
    #[must_use]
    pub fn records(&self) -> Vec<CurrencyRecord> {
        self.selected
            .iter()
            .chain(&self.released)
            .map(|currency| currency.record().clone())
            .collect()
    }
}

/// Stateless service maintaining the selected-list ordering invariant.
///
/// For the selected set `S`, positions are exactly `{0, ..., |S| - 1}`;
/// unselected currencies carry [`Position::INVALID`].
pub struct OrderingService;

impl OrderingService {
    /// Appends a currency to the end of the selected list.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::AlreadySelected` if the currency is already
    /// selected or present in `selected`, or a validation error if
    /// `selected` breaks the ordering invariant.
    pub fn select(
        currency: &Currency,
        selected: &[Currency],
    ) -> Result<Vec<Currency>, SelectionError> {
        Self::validate_positions(selected)?;
        if currency.is_selected() || selected.contains(currency) {
            return Err(SelectionError::AlreadySelected(currency.code().clone()));
        }

        let mut result = selected.to_vec();
        Self::sort_by_position(&mut result);

        let mut added = currency.clone();
        added.set_position(Position::new(result.len()));
        added.set_selected(true);
        added.set_focused(false);
        debug!(code = %added.code(), position = %added.position(), "Currency selected");
        result.push(added);

        Ok(result)
    }

    /// Removes a currency from the selected list, closing the gap it leaves.
    ///
    /// Every currency ranked after the removed one moves up by one; the
    /// relative order of the rest is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::NotSelected` if the currency is not in
    /// `selected`, or a validation error if `selected` breaks the ordering
    /// invariant.
    pub fn unselect(
        currency: &Currency,
        selected: &[Currency],
    ) -> Result<SelectionChange, SelectionError> {
        Self::validate_positions(selected)?;
        let removed_at = selected
            .iter()
            .find(|candidate| *candidate == currency)
            .map(Currency::position)
            .ok_or_else(|| SelectionError::NotSelected(currency.code().clone()))?;

        let mut change = SelectionChange {
            selected: Vec::with_capacity(selected.len().saturating_sub(1)),
            released: Vec::with_capacity(1),
        };
        for candidate in selected {
            let mut candidate = candidate.clone();
            if candidate == *currency {
                Self::release(&mut candidate);
                change.released.push(candidate);
            } else {
                if candidate.position() > removed_at {
                    candidate.set_position(candidate.position().decremented());
                }
                change.selected.push(candidate);
            }
        }
        Self::sort_by_position(&mut change.selected);

        debug!(
            code = %currency.code(),
            position = %removed_at,
            remaining = change.selected.len(),
            "Currency unselected"
        );
        Ok(change)
    }

    /// Unselects every currency as a single batch.
    #[must_use]
    pub fn remove_all(selected: &[Currency]) -> SelectionChange {
        let released: Vec<Currency> = selected
            .iter()
            .cloned()
            .map(|mut currency| {
                Self::release(&mut currency);
                currency
            })
            .collect();
        debug!(count = released.len(), "All currencies unselected");
        SelectionChange {
            selected: Vec::new(),
            released,
        }
    }

    /// Checks that `selected` holds distinct selected currencies whose
    /// positions are exactly `0..selected.len()`.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate_positions(selected: &[Currency]) -> Result<(), SelectionError> {
        let mut seen = HashSet::with_capacity(selected.len());
        for currency in selected {
            if !seen.insert(currency.code()) {
                return Err(SelectionError::DuplicateCurrency(currency.code().clone()));
            }
            if !currency.is_selected() {
                return Err(SelectionError::NotSelected(currency.code().clone()));
            }
        }

        let mut positions: Vec<i32> = selected.iter().map(|c| c.position().raw()).collect();
        positions.sort_unstable();
        let contiguous = positions
            .iter()
            .enumerate()
            .all(|(index, raw)| Position::new(index).raw() == *raw);
        if contiguous {
            Ok(())
        } else {
            Err(SelectionError::NonContiguousPositions(positions))
        }
    }

    /// Orders currencies by ascending position.
    pub fn sort_by_position(currencies: &mut [Currency]) {
        currencies.sort_by_key(Currency::position);
    }

    fn release(currency: &mut Currency) {
        currency.set_position(Position::INVALID);
        currency.set_selected(false);
        currency.set_focused(false);
    }
}
