//! Keyboard events and input outcomes.

use crate::currency::Currency;

/// A decimal digit key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    /// 0
    Zero,
    /// 1
    One,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
}

impl Digit {
    /// All digits in ascending order.
    pub const ALL: [Self; 10] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
    ];

    /// Numeric value of the digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The ASCII character for the digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.value()) as char
    }

    /// Parses an ASCII digit character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| Self::ALL.get(usize::try_from(d).ok()?).copied())
    }
}

impl TryFrom<u8> for Digit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(usize::from(value)).copied().ok_or(value)
    }
}

/// One discrete keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardInput {
    /// A digit key.
    Digit(Digit),
    /// The decimal separator key, whatever the locale renders it as.
    DecimalSeparator,
    /// Delete the last character.
    Backspace,
}

impl KeyboardInput {
    /// Maps a typed character to a key.
    ///
    /// Digits map to [`KeyboardInput::Digit`], `.` and `decimal_separator`
    /// to [`KeyboardInput::DecimalSeparator`], and the ASCII backspace and
    /// delete control characters to [`KeyboardInput::Backspace`].
    #[must_use]
    pub fn from_char(c: char, decimal_separator: char) -> Option<Self> {
        match c {
            '.' => Some(Self::DecimalSeparator),
            '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            c if c == decimal_separator => Some(Self::DecimalSeparator),
            c => Digit::from_char(c).map(Self::Digit),
        }
    }
}

/// Why a keystroke was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The integer part would exceed the digit limit.
    IntegerTooLong,
    /// The fractional part would exceed the decimal-place limit.
    TooManyDecimalPlaces,
    /// A second decimal separator was typed.
    DuplicateSeparator,
}

impl Rejection {
    /// Returns the stable rejection code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::IntegerTooLong => "INTEGER_TOO_LONG",
            Self::TooManyDecimalPlaces => "TOO_MANY_DECIMAL_PLACES",
            Self::DuplicateSeparator => "DUPLICATE_SEPARATOR",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::IntegerTooLong => "integer part is too long",
            Self::TooManyDecimalPlaces => "too many decimal places",
            Self::DuplicateSeparator => "only one decimal separator is allowed",
        })
    }
}

/// Result of processing one keystroke.
///
/// `currencies` is always a fresh list; on rejection it equals the input
/// list and `rejection` carries the feedback signal for the UI.
#[derive(Debug, Clone, Default)]
pub struct InputOutcome {
    /// The selected currencies after the keystroke.
    pub currencies: Vec<Currency>,
    /// Set when the keystroke was rejected.
    pub rejection: Option<Rejection>,
}

impl InputOutcome {
    /// Returns true if the keystroke was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_conversions() {
        assert_eq!(Digit::Seven.value(), 7);
        assert_eq!(Digit::Seven.as_char(), '7');
        assert_eq!(Digit::from_char('0'), Some(Digit::Zero));
        assert_eq!(Digit::from_char('9'), Some(Digit::Nine));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::try_from(3), Ok(Digit::Three));
        assert_eq!(Digit::try_from(10), Err(10));
    }

    #[test]
    fn test_input_from_char() {
        assert_eq!(
            KeyboardInput::from_char('5', ','),
            Some(KeyboardInput::Digit(Digit::Five))
        );
        assert_eq!(
            KeyboardInput::from_char(',', ','),
            Some(KeyboardInput::DecimalSeparator)
        );
        assert_eq!(
            KeyboardInput::from_char('.', ','),
            Some(KeyboardInput::DecimalSeparator)
        );
        assert_eq!(
            KeyboardInput::from_char('\u{7f}', '.'),
            Some(KeyboardInput::Backspace)
        );
        assert_eq!(KeyboardInput::from_char('x', '.'), None);
    }

    #[test]
    fn test_rejection_codes() {
        assert_eq!(Rejection::IntegerTooLong.code(), "INTEGER_TOO_LONG");
        assert_eq!(
            Rejection::TooManyDecimalPlaces.code(),
            "TOO_MANY_DECIMAL_PLACES"
        );
        assert_eq!(Rejection::DuplicateSeparator.code(), "DUPLICATE_SEPARATOR");
    }
}
