//! Named number-formatting locales.

use std::str::FromStr;

/// Narrow no-break space, the French grouping separator.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Locales with a built-in separator pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// `1,234.5`
    #[default]
    EnUs,
    /// `1.234,5`
    DeDe,
    /// `1 234,5` (narrow no-break space)
    FrFr,
    /// `1'234.5`
    DeCh,
}

impl Locale {
    /// Thousands grouping separator.
    #[must_use]
    pub const fn grouping_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::DeDe => '.',
            Self::FrFr => NARROW_NO_BREAK_SPACE,
            Self::DeCh => '\'',
        }
    }

    /// Decimal separator.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::DeCh => '.',
            Self::DeDe | Self::FrFr => ',',
        }
    }

    /// BCP-47 style tag, e.g. `en-US`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::DeCh => "de-CH",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            "de-ch" => Ok(Self::DeCh),
            _ => Err(format!("Unknown locale: {s}")),
        }
    }
}
