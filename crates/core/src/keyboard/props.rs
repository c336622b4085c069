//! Property tests for the keyboard pipeline.

use proptest::prelude::*;
use ratewise_shared::CurrencyCode;
use rust_decimal_macros::dec;

use super::*;
use crate::currency::Currency;
use crate::ordering::OrderingService;

fn key() -> impl Strategy<Value = KeyboardInput> {
    prop_oneof![
        6 => (0u8..10).prop_map(|d| KeyboardInput::Digit(Digit::try_from(d).unwrap_or(Digit::Zero))),
        2 => Just(KeyboardInput::DecimalSeparator),
        1 => Just(KeyboardInput::Backspace),
    ]
}

fn selected() -> Vec<Currency> {
    let list = [("USD", dec!(1)), ("EUR", dec!(0.9)), ("JPY", dec!(150))]
        .iter()
        .fold(Vec::new(), |list, (c, rate)| {
            let currency = Currency::new(CurrencyCode::new(c).unwrap(), *rate);
            OrderingService::select(&currency, &list).unwrap()
        });
    FocusService::ensure_focus(&list)
}

fn assert_valid_buffer(raw: &str) {
    let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
    assert!(whole.len() <= 20, "integer part too long: {raw}");
    assert!(fraction.len() <= 4, "too many places: {raw}");
    assert!(raw.matches('.').count() <= 1, "two separators: {raw}");
    assert!(!raw.starts_with('.'), "leading separator: {raw}");
    assert!(
        !(raw.len() == 2 && raw.starts_with('0') && !raw.ends_with('.')),
        "uncollapsed zero: {raw}"
    );
}

proptest! {
    #[test]
    fn prop_buffer_always_valid(keys in prop::collection::vec(key(), 0..40)) {
        let machine = KeyboardStateMachine::default();
        let mut list = selected();
        for input in keys {
            list = machine.process_input(input, &list).unwrap().currencies;
            assert_valid_buffer(list[0].conversion().raw_input());
        }
    }

    #[test]
    fn prop_rejection_keeps_list(keys in prop::collection::vec(key(), 0..40)) {
        let machine = KeyboardStateMachine::default();
        let mut list = selected();
        for input in keys {
            let outcome = machine.process_input(input, &list).unwrap();
            if outcome.is_rejected() {
                for (before, after) in list.iter().zip(&outcome.currencies) {
                    prop_assert!(before.deep_eq(after));
                    prop_assert_eq!(before.conversion(), after.conversion());
                }
            }
            list = outcome.currencies;
        }
    }

    #[test]
    fn prop_empty_focus_clears_everything(keys in prop::collection::vec(key(), 0..20)) {
        let machine = KeyboardStateMachine::default();
        let mut list = selected();
        for input in keys {
            list = machine.process_input(input, &list).unwrap().currencies;
        }
        while !list[0].conversion().is_empty() {
            list = machine.process_input(KeyboardInput::Backspace, &list).unwrap().currencies;
        }
        list = machine.process_input(KeyboardInput::Backspace, &list).unwrap().currencies;
        prop_assert!(list.iter().all(|c| c.conversion().is_empty()));
    }
}
