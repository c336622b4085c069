//! Seeding an empty store from a catalog of rates.

use ratewise_core::currency::CurrencyRecord;
use ratewise_core::repository::{CurrencyRepository, RepositoryError};
use ratewise_shared::{AppError, CurrencyCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// One catalog line: a code and its rate against the reference currency.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Currency code, possibly reference-prefixed (`USD_EUR`).
    pub code: CurrencyCode,
    /// Units of this currency per reference unit.
    pub exchange_rate: Decimal,
}

/// Errors raised while reading a catalog.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The catalog is not a JSON array of entries.
    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rate is zero or negative.
    #[error("Rate for {0} must be positive")]
    NonPositiveRate(CurrencyCode),

    /// A code appears twice.
    #[error("{0} is listed twice")]
    DuplicateCode(CurrencyCode),

    /// The reference currency is missing or not quoted at one.
    #[error("Catalog must quote the reference currency {0} at 1")]
    MissingReference(CurrencyCode),

    /// Writing the seed failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<SeedError> for AppError {
    fn from(err: SeedError) -> Self {
        match err {
            SeedError::Repository(err) => err.into(),
            other => Self::Validation(other.to_string()),
        }
    }
}

/// Parses a JSON catalog into unselected records.
///
/// # Errors
///
/// Returns an error for malformed JSON, a non-positive rate or a duplicate
/// code.
pub fn parse_catalog(json: &str) -> Result<Vec<CurrencyRecord>, SeedError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    let mut records: Vec<CurrencyRecord> = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.exchange_rate <= Decimal::ZERO {
            return Err(SeedError::NonPositiveRate(entry.code));
        }
        if records.iter().any(|record| record.code == entry.code) {
            return Err(SeedError::DuplicateCode(entry.code));
        }
        records.push(CurrencyRecord::new(entry.code, entry.exchange_rate));
    }
    Ok(records)
}

/// Checks that `reference` is in the catalog at rate one.
///
/// The entry may be bare (`USD`) or reference-prefixed (`USD_USD`).
///
/// # Errors
///
/// Returns `SeedError::MissingReference` otherwise.
pub fn check_reference(
    records: &[CurrencyRecord],
    reference: &CurrencyCode,
) -> Result<(), SeedError> {
    let quoted = records.iter().any(|record| {
        record.code.trimmed() == reference.as_str() && record.exchange_rate == Decimal::ONE
    });
    if quoted {
        Ok(())
    } else {
        Err(SeedError::MissingReference(reference.clone()))
    }
}

/// Inserts `records` only when the store holds nothing.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns the store's error if reading or writing fails.
pub fn seed_if_empty<R: CurrencyRepository + ?Sized>(
    repository: &R,
    records: &[CurrencyRecord],
) -> Result<usize, RepositoryError> {
    if !repository.fetch_all_currencies()?.is_empty() {
        return Ok(0);
    }
    repository.upsert_currencies(records)?;
    info!(count = records.len(), "Store seeded");
    Ok(records.len())
}
