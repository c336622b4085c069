//! Locale-aware rendering of numeric strings.

use std::str::FromStr;

use ratewise_shared::config::single_char;
use ratewise_shared::{AppError, AppResult, LocaleConfig};
use rust_decimal::Decimal;

use super::locale::Locale;

/// Errors from building a formatter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Grouping and decimal separators are the same character.
    #[error("Grouping and decimal separators must differ, both are {0:?}")]
    SameSeparators(char),

    /// A separator is a digit or a minus sign.
    #[error("Separator {0:?} cannot be a digit or sign")]
    AmbiguousSeparator(char),

    /// Group size is zero.
    #[error("Grouping size must be positive")]
    ZeroGroupingSize,

    /// Unknown locale preset.
    #[error("{0}")]
    UnknownLocale(String),
}

impl From<FormatError> for AppError {
    fn from(err: FormatError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Renders numeric strings with grouping applied to the integer part.
///
/// The fractional part is copied verbatim, so trailing zeros the user typed
/// (or the four-place padding of a computed amount) are never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalFormatter {
    grouping_separator: char,
    decimal_separator: char,
    grouping_size: usize,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl DecimalFormatter {
    /// Creates a formatter with explicit separators.
    ///
    /// # Errors
    ///
    /// Returns an error if the separators coincide, either one is a digit or
    /// `-`, or `grouping_size` is zero.
    pub fn new(
        grouping_separator: char,
        decimal_separator: char,
        grouping_size: usize,
    ) -> Result<Self, FormatError> {
        if grouping_separator == decimal_separator {
            return Err(FormatError::SameSeparators(grouping_separator));
        }
        for separator in [grouping_separator, decimal_separator] {
            if separator.is_ascii_digit() || separator == '-' {
                return Err(FormatError::AmbiguousSeparator(separator));
            }
        }
        if grouping_size == 0 {
            return Err(FormatError::ZeroGroupingSize);
        }
        Ok(Self {
            grouping_separator,
            decimal_separator,
            grouping_size,
        })
    }

    /// Creates a formatter for a built-in locale with groups of three.
    #[must_use]
    pub const fn for_locale(locale: Locale) -> Self {
        Self {
            grouping_separator: locale.grouping_separator(),
            decimal_separator: locale.decimal_separator(),
            grouping_size: 3,
        }
    }

    /// Builds a formatter from configuration.
    ///
    /// Explicit separators override those of the preset; without a preset
    /// the defaults are `en-US`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an unknown preset or an invalid
    /// separator combination.
    pub fn from_config(config: &LocaleConfig) -> AppResult<Self> {
        let locale = match config.preset.as_deref() {
            Some(tag) => Locale::from_str(tag).map_err(FormatError::UnknownLocale)?,
            None => Locale::default(),
        };
        let grouping = single_char(
            "locale.grouping_separator",
            config.grouping_separator.as_deref(),
        )?
        .unwrap_or(locale.grouping_separator());
        let decimal = single_char(
            "locale.decimal_separator",
            config.decimal_separator.as_deref(),
        )?
        .unwrap_or(locale.decimal_separator());
        Ok(Self::new(grouping, decimal, config.grouping_size)?)
    }

    /// Thousands grouping separator.
    #[must_use]
    pub const fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    /// Decimal separator shown to the user.
    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Formats a numeric string (`.` as decimal point) for display.
    ///
    /// `"1234.5"` -> `"1,234.5"`, `"1234.50"` -> `"1,234.50"`,
    /// `"1234."` -> `"1,234."`. Text that is not numeric is returned as-is.
    #[must_use]
    pub fn format(&self, numeric: &str) -> String {
        match numeric.split_once('.') {
            Some((whole, fraction)) => {
                let mut formatted = self.format_integer(whole);
                formatted.push(self.decimal_separator);
                formatted.push_str(fraction);
                formatted
            }
            None => self.format_integer(numeric),
        }
    }

    /// Applies the `#,##0` pattern to an integer string.
    fn format_integer(&self, digits: &str) -> String {
        let (sign, unsigned) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits),
        };
        if !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return digits.to_string();
        }

        let significant = unsigned.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };

        let len = significant.len();
        let mut out = String::with_capacity(sign.len() + len + len / self.grouping_size * 3);
        out.push_str(sign);
        for (i, digit) in significant.chars().enumerate() {
            if i > 0 && (len - i) % self.grouping_size == 0 {
                out.push(self.grouping_separator);
            }
            out.push(digit);
        }
        out
    }

    /// Parses display text produced by [`Self::format`] back into a decimal.
    ///
    /// Grouping separators are removed and the locale decimal separator is
    /// read as `.`. Returns `None` if the text is not a number.
    #[must_use]
    pub fn parse_display(&self, text: &str) -> Option<Decimal> {
        let numeric: String = text
            .chars()
            .filter(|c| *c != self.grouping_separator)
            .map(|c| if c == self.decimal_separator { '.' } else { c })
            .collect();
        let numeric = numeric.strip_suffix('.').unwrap_or(&numeric);
        if numeric.is_empty() {
            return None;
        }
        Decimal::from_str(numeric).ok()
    }
}
