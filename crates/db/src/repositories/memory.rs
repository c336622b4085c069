//! In-memory currency store.

use dashmap::DashMap;
use ratewise_core::currency::CurrencyRecord;
use ratewise_core::repository::{CurrencyRepository, RepositoryError};
use ratewise_shared::CurrencyCode;
use tracing::debug;

/// Store backed by a concurrent map keyed by code.
#[derive(Debug, Default)]
pub struct InMemoryCurrencyRepository {
    records: DashMap<CurrencyCode, CurrencyRecord>,
}

impl InMemoryCurrencyRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `records`; later duplicates win.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = CurrencyRecord>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.records.insert(record.code.clone(), record);
        }
        repo
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CurrencyRepository for InMemoryCurrencyRepository {
    fn fetch_all_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError> {
        let mut records: Vec<CurrencyRecord> = self
            .records
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        records.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(records)
    }

    fn upsert_currencies(&self, records: &[CurrencyRecord]) -> Result<(), RepositoryError> {
        for record in records {
            self.records.insert(record.code.clone(), record.clone());
        }
        debug!(count = records.len(), "Currencies upserted in memory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratewise_core::currency::Position;
    use rust_decimal_macros::dec;

    fn record(code: &str) -> CurrencyRecord {
        CurrencyRecord::new(CurrencyCode::new(code).unwrap(), dec!(1.5))
    }

    #[test]
    fn test_fetch_all_sorted_by_code() {
        let repo = InMemoryCurrencyRepository::with_records([record("JPY"), record("EUR")]);
        let codes: Vec<String> = repo
            .fetch_all_currencies()
            .unwrap()
            .into_iter()
            .map(|r| r.code.to_string())
            .collect();
        assert_eq!(codes, vec!["EUR", "JPY"]);
    }

    #[test]
    fn test_upsert_replaces_by_code() {
        let repo = InMemoryCurrencyRepository::with_records([record("EUR")]);
        let mut updated = record("EUR");
        updated.is_selected = true;
        updated.position = Position::FIRST;
        repo.upsert_currencies(&[updated.clone()]).unwrap();
        repo.upsert_currencies(&[updated.clone()]).unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.fetch_selected_currencies().unwrap(), vec![updated]);
    }
}
