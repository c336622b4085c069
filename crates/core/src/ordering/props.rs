//! Property-based tests for the selected-list ordering.
//!
//! - Property 5: Positions stay dense after any select/unselect sequence
//! - Property 6: Unselect preserves the relative order of the rest

use proptest::prelude::*;
use ratewise_shared::CurrencyCode;
use rust_decimal::Decimal;

use super::service::OrderingService;
use crate::currency::{Currency, Position};

const CODES: [&str; 8] = ["USD", "EUR", "JPY", "GBP", "CHF", "CAD", "AUD", "SEK"];

fn catalog() -> Vec<Currency> {
    CODES
        .iter()
        .map(|code| Currency::new(CurrencyCode::new(code).unwrap(), Decimal::ONE))
        .collect()
}

/// Applies toggle operations: an index selects the currency if it is not
/// selected and unselects it otherwise.
fn apply_toggles(toggles: &[usize]) -> Vec<Currency> {
    let catalog = catalog();
    let mut selected: Vec<Currency> = Vec::new();
    for &index in toggles {
        let target = &catalog[index % catalog.len()];
        selected = if selected.contains(target) {
            OrderingService::unselect(target, &selected).unwrap().selected
        } else {
            OrderingService::select(target, &selected).unwrap()
        };
    }
    selected
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 5.1: After any sequence, positions are exactly 0..|S|.
    #[test]
    fn prop_positions_stay_dense(toggles in prop::collection::vec(0usize..8, 0..40)) {
        let selected = apply_toggles(&toggles);
        prop_assert!(OrderingService::validate_positions(&selected).is_ok());
        for (index, currency) in selected.iter().enumerate() {
            prop_assert_eq!(currency.position(), Position::new(index));
        }
    }

    /// Property 6.1: Unselecting keeps the others in the same relative order.
    #[test]
    fn prop_unselect_preserves_relative_order(
        toggles in prop::collection::vec(0usize..8, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let selected = apply_toggles(&toggles);
        prop_assume!(!selected.is_empty());
        let target = pick.get(&selected).clone();

        let change = OrderingService::unselect(&target, &selected).unwrap();
        let before: Vec<&CurrencyCode> = selected
            .iter()
            .filter(|c| **c != target)
            .map(Currency::code)
            .collect();
        let after: Vec<&CurrencyCode> = change.selected.iter().map(Currency::code).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(change.released[0].position(), Position::INVALID);
    }

    /// Property 6.2: Re-selecting an unselected currency places it last.
    #[test]
    fn prop_reselect_goes_last(
        toggles in prop::collection::vec(0usize..8, 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let selected = apply_toggles(&toggles);
        prop_assume!(!selected.is_empty());
        let target = pick.get(&selected).clone();

        let change = OrderingService::unselect(&target, &selected).unwrap();
        let reselected = OrderingService::select(&change.released[0], &change.selected).unwrap();
        let last = reselected.last().unwrap();
        prop_assert_eq!(last, &target);
        prop_assert_eq!(last.position(), Position::new(selected.len() - 1));
    }
}
