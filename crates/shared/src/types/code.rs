//! Currency code type.
//!
//! Codes are the primary key of the catalog. They are stored upper-cased and
//! may carry a reference-currency prefix (`USD_EUR`), which [`CurrencyCode::trimmed`]
//! strips for display.

use serde::{Deserialize, Serialize};

/// Separator between the reference-currency prefix and the currency itself.
pub const PREFIX_SEPARATOR: char = '_';

/// Error returned when a string is not a valid currency code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyCodeError {
    /// The code is empty.
    #[error("Currency code cannot be empty")]
    Empty,

    /// The code contains a character other than ASCII letters, digits or `_`.
    #[error("Invalid character {1:?} in currency code '{0}'")]
    InvalidCharacter(String, char),
}

/// ISO-4217-like currency code (e.g. `EUR`, or prefixed `USD_EUR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parses and normalizes a currency code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or contains characters other
    /// than ASCII alphanumerics and `_`.
    pub fn new(code: &str) -> Result<Self, CurrencyCodeError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(CurrencyCodeError::Empty);
        }
        if let Some(c) = code
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != PREFIX_SEPARATOR)
        {
            return Err(CurrencyCodeError::InvalidCharacter(code.to_string(), c));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the full code as stored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code without its reference-currency prefix.
    ///
    /// `USD_EUR` -> `EUR`; unprefixed codes are returned as-is.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.0
            .rsplit_once(PREFIX_SEPARATOR)
            .map_or(self.0.as_str(), |(_, code)| code)
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = CurrencyCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
