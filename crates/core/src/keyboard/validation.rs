//! Normalization and validation of the edit buffer.
//!
//! Each rule writes its outcome into the buffer: the candidate when it
//! passes, the candidate minus its last character when it fails. Rules run
//! in order and stop at the first failure, so a rejected edit leaves the
//! buffer at its pre-edit value.

use ratewise_shared::InputConfig;

use super::types::Rejection;
use crate::currency::Conversion;

/// Rewrites a candidate buffer before validation.
///
/// - `"."` becomes `"0."`
/// - a leading `0` followed by one non-separator character collapses to that
///   character (`"07"` -> `"7"`, `"00"` -> `"0"`)
#[must_use]
pub fn clean_input(input: &str) -> String {
    if input == "." {
        return "0.".to_string();
    }
    let mut chars = input.chars();
    if let (Some('0'), Some(second), None) = (chars.next(), chars.next(), chars.next())
        && second != '.'
    {
        return second.to_string();
    }
    input.to_string()
}

/// Returns `input` without its last character.
fn drop_last(input: &str) -> &str {
    input
        .char_indices()
        .next_back()
        .map_or(input, |(index, _)| &input[..index])
}

/// Enforces the digit and separator limits on a candidate buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
    limits: InputConfig,
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}

impl InputValidator {
    /// Creates a validator with the given limits.
    #[must_use]
    pub const fn new(limits: InputConfig) -> Self {
        Self { limits }
    }

    /// The configured limits.
    #[must_use]
    pub const fn limits(&self) -> InputConfig {
        self.limits
    }

    /// Validates `input` and writes the longest accepted prefix to `buffer`.
    ///
    /// # Errors
    ///
    /// Returns the first rule the candidate violates.
    pub fn validate(&self, input: &str, buffer: &mut Conversion) -> Result<(), Rejection> {
        self.validate_length(input, buffer)?;
        self.validate_decimal_places(input, buffer)?;
        Self::validate_decimal_separator(input, buffer)
    }

    /// The integer part must not exceed `max_integer_digits` characters.
    fn validate_length(&self, input: &str, buffer: &mut Conversion) -> Result<(), Rejection> {
        let whole = input.split_once('.').map_or(input, |(whole, _)| whole);
        Self::resolve(
            whole.chars().count() <= self.limits.max_integer_digits,
            input,
            buffer,
            Rejection::IntegerTooLong,
        )
    }

    /// The text after the first separator must not exceed
    /// `max_decimal_places` characters.
    fn validate_decimal_places(
        &self,
        input: &str,
        buffer: &mut Conversion,
    ) -> Result<(), Rejection> {
        let places = input
            .split_once('.')
            .map_or(0, |(_, fraction)| fraction.chars().count());
        Self::resolve(
            places <= self.limits.max_decimal_places,
            input,
            buffer,
            Rejection::TooManyDecimalPlaces,
        )
    }

    /// At most one decimal separator.
    fn validate_decimal_separator(input: &str, buffer: &mut Conversion) -> Result<(), Rejection> {
        let separators = input.chars().filter(|c| *c == '.').count();
        Self::resolve(separators <= 1, input, buffer, Rejection::DuplicateSeparator)
    }

    fn resolve(
        valid: bool,
        input: &str,
        buffer: &mut Conversion,
        rejection: Rejection,
    ) -> Result<(), Rejection> {
        if valid {
            buffer.set_raw_input(input);
            Ok(())
        } else {
            buffer.set_raw_input(drop_last(input));
            Err(rejection)
        }
    }
}
