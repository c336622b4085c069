//! Integration tests for JsonFileCurrencyRepository.
//!
//! Tests the file round trip, atomic replacement and corrupt-file handling.

use std::fs;

use ratewise_core::currency::{CurrencyRecord, Position};
use ratewise_core::repository::{CurrencyRepository, RepositoryError};
use ratewise_db::{JsonFileCurrencyRepository, parse_catalog, seed_if_empty};
use ratewise_shared::CurrencyCode;
use rust_decimal_macros::dec;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"code": "USD_USD", "exchange_rate": "1"},
    {"code": "USD_EUR", "exchange_rate": "0.9"},
    {"code": "USD_JPY", "exchange_rate": "150.25"}
]"#;

fn selected(code: &str, position: usize) -> CurrencyRecord {
    let mut record = CurrencyRecord::new(CurrencyCode::new(code).unwrap(), dec!(1));
    record.position = Position::new(position);
    record.is_selected = true;
    record
}

// ============================================================================
// Test 1: Missing file opens empty
// ============================================================================
#[test]
fn test_open_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileCurrencyRepository::open(dir.path().join("currencies.json")).unwrap();
    assert!(repo.fetch_all_currencies().unwrap().is_empty());
    assert!(!repo.path().exists());
}

// ============================================================================
// Test 2: Seed, select, reopen
// ============================================================================
#[test]
fn test_records_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("currencies.json");

    let repo = JsonFileCurrencyRepository::open(&path).unwrap();
    let catalog = parse_catalog(CATALOG).unwrap();
    assert_eq!(seed_if_empty(&repo, &catalog).unwrap(), 3);

    let mut jpy = catalog[2].clone();
    jpy.position = Position::FIRST;
    jpy.is_selected = true;
    let mut eur = catalog[1].clone();
    eur.position = Position::new(1);
    eur.is_selected = true;
    repo.upsert_currencies(&[eur, jpy]).unwrap();
    drop(repo);

    let reopened = JsonFileCurrencyRepository::open(&path).unwrap();
    assert_eq!(reopened.fetch_all_currencies().unwrap().len(), 3);
    let codes: Vec<String> = reopened
        .fetch_selected_currencies()
        .unwrap()
        .into_iter()
        .map(|r| r.code.to_string())
        .collect();
    assert_eq!(codes, vec!["USD_JPY", "USD_EUR"]);
    assert_eq!(
        reopened.fetch_all_currencies().unwrap()[1].exchange_rate,
        dec!(150.25)
    );
    assert_eq!(seed_if_empty(&reopened, &catalog).unwrap(), 0);
}

// ============================================================================
// Test 3: No staging file left behind
// ============================================================================
#[test]
fn test_upsert_leaves_no_staging_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.json");
    let repo = JsonFileCurrencyRepository::open(&path).unwrap();
    repo.upsert_currencies(&[selected("EUR", 0)]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["currencies.json"]);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"is_selected\": true"));
    assert!(contents.contains("\"position\": 0"));
}

// ============================================================================
// Test 4: Corrupt files
// ============================================================================
#[test]
fn test_open_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.json");
    fs::write(&path, "not json").unwrap();
    let err = JsonFileCurrencyRepository::open(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::Serialization(_)));
}

#[test]
fn test_open_rejects_duplicate_codes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.json");
    fs::write(
        &path,
        r#"[{"code": "EUR", "exchange_rate": "0.9"}, {"code": "EUR", "exchange_rate": "0.8"}]"#,
    )
    .unwrap();
    let err = JsonFileCurrencyRepository::open(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::Corrupt(_)));
    assert_eq!(err.error_code(), "STORAGE_CORRUPT");
}

#[test]
fn test_missing_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("currencies.json");
    fs::write(&path, r#"[{"code": "EUR", "exchange_rate": "0.9"}]"#).unwrap();
    let repo = JsonFileCurrencyRepository::open(&path).unwrap();
    let records = repo.fetch_all_currencies().unwrap();
    assert_eq!(records[0].position, Position::INVALID);
    assert!(!records[0].is_selected);
}
