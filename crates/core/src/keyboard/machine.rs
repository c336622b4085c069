//! Keyboard input state machine.
//!
//! The only state is the focused currency's raw input. Each event is
//! applied to a copy of the selected list; the caller's list is never
//! touched, and a rejected keystroke returns a list equal to the input.

use ratewise_shared::InputConfig;
use tracing::{debug, warn};

use super::error::InputError;
use super::focus::FocusService;
use super::types::{InputOutcome, KeyboardInput, Rejection};
use super::validation::{InputValidator, clean_input};
use crate::currency::{Conversion, Currency};
use crate::propagation::ConversionPropagator;

/// Turns keystrokes into validated buffers and propagated conversions.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardStateMachine {
    validator: InputValidator,
}

impl KeyboardStateMachine {
    /// Creates a state machine with the given input limits.
    #[must_use]
    pub const fn new(limits: InputConfig) -> Self {
        Self {
            validator: InputValidator::new(limits),
        }
    }

    /// Applies one keystroke to the focused currency.
    ///
    /// - Digit / decimal separator: append, normalize, validate; on success
    ///   propagate, otherwise report the rejection.
    /// - Backspace: drop the last character and always propagate, even when
    ///   the buffer was already empty.
    ///
    /// An empty list is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error only when the focus invariant is broken: a non-empty
    /// list with no focused currency, or several focused currencies.
    pub fn process_input(
        &self,
        input: KeyboardInput,
        currencies: &[Currency],
    ) -> Result<InputOutcome, InputError> {
        let mut working = currencies.to_vec();
        let Some(index) = FocusService::focused_index(&working)? else {
            return Ok(InputOutcome {
                currencies: working,
                rejection: None,
            });
        };

        let mut focused = working[index].clone();
        let existing = focused.conversion().raw_input().to_string();
        let result = match input {
            KeyboardInput::Digit(digit) => {
                self.append(&existing, digit.as_char(), focused.conversion_mut())
            }
            KeyboardInput::DecimalSeparator => {
                self.append(&existing, '.', focused.conversion_mut())
            }
            KeyboardInput::Backspace => {
                let mut text = existing;
                text.pop();
                focused.conversion_mut().set_raw_input(text);
                Ok(())
            }
        };

        match result {
            Ok(()) => {
                debug!(
                    code = %focused.code(),
                    raw_input = focused.conversion().raw_input(),
                    "Input committed"
                );
                ConversionPropagator::propagate(&focused, &mut working);
                Ok(InputOutcome {
                    currencies: working,
                    rejection: None,
                })
            }
            Err(rejection) => {
                warn!(
                    code = %focused.code(),
                    rejection = rejection.code(),
                    ?input,
                    "Input rejected"
                );
                Ok(InputOutcome {
                    currencies: working,
                    rejection: Some(rejection),
                })
            }
        }
    }

    fn append(
        &self,
        existing: &str,
        key: char,
        buffer: &mut Conversion,
    ) -> Result<(), Rejection> {
        let mut candidate = String::with_capacity(existing.len() + 1);
        candidate.push_str(existing);
        candidate.push(key);
        let candidate = clean_input(&candidate);
        self.validator.validate(&candidate, buffer)
    }
}
