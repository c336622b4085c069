//! Property-based tests for decimal formatting.
//!
//! - Property 3: Format/parse round trip
//! - Property 4: Fractional digits are preserved verbatim

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::formatter::DecimalFormatter;
use super::locale::Locale;

/// Strategy for buffers the keyboard accepts: up to 20 integer digits and
/// an optional separator with up to 4 fractional digits.
fn accepted_input() -> impl Strategy<Value = String> {
    ("[1-9][0-9]{0,19}|0", proptest::option::of("[0-9]{0,4}")).prop_map(|(whole, fraction)| {
        match fraction {
            Some(fraction) => format!("{whole}.{fraction}"),
            None => whole,
        }
    })
}

fn any_locale() -> impl Strategy<Value = Locale> {
    prop_oneof![
        Just(Locale::EnUs),
        Just(Locale::DeDe),
        Just(Locale::FrFr),
        Just(Locale::DeCh),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property 3.1: Formatting then re-parsing yields the original value.
    #[test]
    fn prop_format_parse_roundtrip(input in accepted_input(), locale in any_locale()) {
        let formatter = DecimalFormatter::for_locale(locale);
        let expected = Decimal::from_str(input.trim_end_matches('.')).unwrap();
        let displayed = formatter.format(&input);
        prop_assert_eq!(formatter.parse_display(&displayed), Some(expected));
    }

    /// Property 4.1: The text after the decimal separator is the typed fraction.
    #[test]
    fn prop_fraction_is_verbatim(input in accepted_input(), locale in any_locale()) {
        let formatter = DecimalFormatter::for_locale(locale);
        let displayed = formatter.format(&input);
        match input.split_once('.') {
            Some((_, fraction)) => {
                let (_, shown) = displayed
                    .rsplit_once(formatter.decimal_separator())
                    .expect("decimal separator present");
                prop_assert_eq!(shown, fraction);
            }
            None => prop_assert!(!displayed.contains(formatter.decimal_separator())),
        }
    }

    /// Property 4.2: Removing grouping separators restores the integer digits.
    #[test]
    fn prop_grouping_only_inserts_separators(whole in "[1-9][0-9]{0,19}") {
        let formatter = DecimalFormatter::default();
        let displayed = formatter.format(&whole);
        let stripped: String = displayed
            .chars()
            .filter(|c| *c != formatter.grouping_separator())
            .collect();
        prop_assert_eq!(stripped, whole);
        for group in displayed.split(formatter.grouping_separator()).skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }
}
