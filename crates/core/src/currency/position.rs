//! Dense display rank of a selected currency.

use serde::{Deserialize, Serialize};

/// 0-based rank among the selected currencies, or [`Position::INVALID`].
///
/// Persisted as a plain integer with `-1` for unselected currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(i32);

impl Position {
    /// Sentinel carried by every unselected currency.
    pub const INVALID: Self = Self(-1);

    /// Rank of the first selected currency.
    pub const FIRST: Self = Self(0);

    /// Creates a position from a list index.
    ///
    /// Indexes beyond `i32::MAX` cannot occur for a currency catalog and
    /// saturate.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(i32::try_from(index).unwrap_or(i32::MAX))
    }

    /// Creates a position from its persisted integer form.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the persisted integer form.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the list index, or `None` for the sentinel.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }

    /// Returns true unless this is the sentinel (or any negative rank).
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// Returns the rank one place closer to the front.
    #[must_use]
    pub(crate) const fn decremented(self) -> Self {
        Self(self.0 - 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::INVALID
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
