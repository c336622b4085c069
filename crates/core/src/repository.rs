//! Persistence seam for currency records.
//!
//! Storage adapters live in `ratewise-db`; the session service only sees
//! this trait.

use std::path::PathBuf;
use std::sync::Arc;

use ratewise_shared::AppError;
use thiserror::Error;

use crate::currency::CurrencyRecord;

/// Errors raised by a currency store.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Records could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The stored data breaks a store invariant.
    #[error("Corrupt store: {0}")]
    Corrupt(String),
}

impl RepositoryError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "STORAGE_IO",
            Self::Serialization(_) => "STORAGE_SERIALIZATION",
            Self::Corrupt(_) => "STORAGE_CORRUPT",
        }
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// A store of every known currency, selected or not.
///
/// `upsert_currencies` inserts or replaces by code and must apply the whole
/// batch or none of it.
pub trait CurrencyRepository: Send + Sync {
    /// Every stored record, ordered by code.
    fn fetch_all_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError>;

    /// Selected records ordered by position.
    fn fetch_selected_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError> {
        let mut selected: Vec<CurrencyRecord> = self
            .fetch_all_currencies()?
            .into_iter()
            .filter(|record| record.is_selected)
            .collect();
        selected.sort_by_key(|record| record.position);
        Ok(selected)
    }

    /// Inserts or replaces records by code.
    fn upsert_currencies(&self, records: &[CurrencyRecord]) -> Result<(), RepositoryError>;
}

impl<R: CurrencyRepository + ?Sized> CurrencyRepository for Arc<R> {
    fn fetch_all_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError> {
        (**self).fetch_all_currencies()
    }

    fn fetch_selected_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError> {
        (**self).fetch_selected_currencies()
    }

    fn upsert_currencies(&self, records: &[CurrencyRecord]) -> Result<(), RepositoryError> {
        (**self).upsert_currencies(records)
    }
}
