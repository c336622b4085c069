//! Propagation of the focused amount to every other selected currency.

use tracing::warn;

use crate::currency::{Currency, CurrencyService};

/// Writes converted amounts after a committed edit.
pub struct ConversionPropagator;

impl ConversionPropagator {
    /// Re-syncs the focused buffer into `currencies` and converts it into
    /// every other currency.
    ///
    /// An empty focused buffer clears every other currency, as does one that
    /// does not parse to a `Decimal`. A conversion the decimal range cannot
    /// hold also clears the target.
    pub fn propagate(focused: &Currency, currencies: &mut [Currency]) {
        let source = focused.conversion();
        let amount = if source.is_empty() {
            None
        } else {
            let parsed = CurrencyService::parse_amount(source.raw_input());
            if parsed.is_none() {
                warn!(
                    code = %focused.code(),
                    raw_input = source.raw_input(),
                    "Focused amount is not a representable decimal, clearing targets"
                );
            }
            parsed
        };

        for currency in currencies.iter_mut() {
            if *currency == *focused {
                *currency.conversion_mut() = source.clone();
                continue;
            }
            let Some(amount) = amount else {
                currency.conversion_mut().clear();
                continue;
            };
            match CurrencyService::convert(amount, focused.exchange_rate(), currency.exchange_rate())
            {
                Some(converted) => currency.conversion_mut().set_value(converted),
                None => {
                    warn!(
                        from = %focused.code(),
                        to = %currency.code(),
                        %amount,
                        "Conversion out of range, clearing target"
                    );
                    currency.conversion_mut().clear();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratewise_shared::CurrencyCode;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn currency(code: &str, rate: Decimal) -> Currency {
        Currency::new(CurrencyCode::new(code).unwrap(), rate)
    }

    #[test]
    fn test_propagates_converted_amount() {
        let mut usd = currency("USD", dec!(1.0));
        usd.conversion_mut().set_raw_input("10");
        let mut list = vec![
            currency("USD", dec!(1.0)),
            currency("EUR", dec!(0.9)),
            currency("JPY", dec!(150)),
        ];

        ConversionPropagator::propagate(&usd, &mut list);

        assert_eq!(list[0].conversion().raw_input(), "10");
        assert_eq!(list[1].conversion().rounded_value(), Some(dec!(9.0000)));
        assert_eq!(list[1].conversion().raw_input(), "9.0000");
        assert_eq!(list[2].conversion().raw_input(), "1500.0000");
    }

    #[test]
    fn test_partial_decimal_propagates() {
        let mut eur = currency("EUR", dec!(0.8));
        eur.conversion_mut().set_raw_input("1.");
        let mut list = vec![currency("EUR", dec!(0.8)), currency("USD", dec!(1))];

        ConversionPropagator::propagate(&eur, &mut list);

        assert_eq!(list[0].conversion().raw_input(), "1.");
        assert_eq!(list[1].conversion().raw_input(), "1.2500");
    }

    #[test]
    fn test_empty_buffer_clears_others() {
        let usd = currency("USD", dec!(1));
        let mut eur = currency("EUR", dec!(0.9));
        eur.conversion_mut().set_value(dec!(9));
        let mut list = vec![currency("USD", dec!(1)), eur];

        ConversionPropagator::propagate(&usd, &mut list);

        assert!(list[0].conversion().is_empty());
        assert!(list[1].conversion().is_empty());
        assert_eq!(list[1].conversion().rounded_value(), None);
    }

    #[test]
    fn test_overflow_clears_target() {
        let mut tiny = currency("AAA", dec!(0.0000001));
        tiny.conversion_mut().set_raw_input("99999999999999999999.9999");
        let mut list = vec![currency("AAA", dec!(0.0000001)), currency("BBB", dec!(100000))];
        list[1].conversion_mut().set_value(dec!(1));

        ConversionPropagator::propagate(&tiny, &mut list);

        assert!(list[1].conversion().is_empty());
    }

    #[test]
    fn test_unrepresentable_source_clears_targets() {
        let mut usd = currency("USD", dec!(1));
        usd.conversion_mut().set_raw_input("1".repeat(30));
        assert_eq!(usd.conversion().rounded_value(), None);
        let mut list = vec![currency("USD", dec!(1)), currency("EUR", dec!(0.9))];
        list[1].conversion_mut().set_value(dec!(9));

        ConversionPropagator::propagate(&usd, &mut list);

        assert_eq!(list[0].conversion().raw_input(), "1".repeat(30));
        assert!(list[1].conversion().is_empty());
    }
}
