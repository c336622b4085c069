//! JSON file currency store.
//!
//! The whole catalog is one pretty-printed JSON array of records. It is read
//! once at open and rewritten on every upsert through a temporary sibling
//! file and a rename, so a crash mid-write leaves the previous file intact.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ratewise_core::currency::CurrencyRecord;
use ratewise_core::repository::{CurrencyRepository, RepositoryError};
use ratewise_shared::CurrencyCode;
use tracing::{debug, error, info};

type Records = BTreeMap<CurrencyCode, CurrencyRecord>;

/// Store persisted as a JSON file.
#[derive(Debug)]
pub struct JsonFileCurrencyRepository {
    path: PathBuf,
    records: RwLock<Records>,
}

impl JsonFileCurrencyRepository {
    /// Opens the store at `path`. A missing file is an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// records, or lists the same code twice.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => Self::decode(&path, &contents)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Store not found, starting empty");
                Records::new()
            }
            Err(err) => return Err(RepositoryError::io(path, err)),
        };
        debug!(path = %path.display(), count = records.len(), "Store opened");
        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn decode(path: &Path, contents: &str) -> Result<Records, RepositoryError> {
        let list: Vec<CurrencyRecord> = serde_json::from_str(contents).map_err(|err| {
            error!(path = %path.display(), error = %err, "Store is not valid JSON");
            RepositoryError::Serialization(err.to_string())
        })?;
        let mut records = Records::new();
        for record in list {
            if let Some(previous) = records.insert(record.code.clone(), record) {
                return Err(RepositoryError::Corrupt(format!(
                    "{} is listed twice in {}",
                    previous.code,
                    path.display()
                )));
            }
        }
        Ok(records)
    }

    fn write(&self, records: &Records) -> Result<(), RepositoryError> {
        let list: Vec<&CurrencyRecord> = records.values().collect();
        let contents = serde_json::to_string_pretty(&list)
            .map_err(|err| RepositoryError::Serialization(err.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| RepositoryError::io(parent, err))?;
        }
        let staging = self.staging_path();
        fs::write(&staging, contents).map_err(|err| RepositoryError::io(&staging, err))?;
        fs::rename(&staging, &self.path).map_err(|err| {
            error!(path = %self.path.display(), error = %err, "Failed to replace store");
            RepositoryError::io(&self.path, err)
        })
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Records>, RepositoryError> {
        self.records
            .read()
            .map_err(|_| RepositoryError::Corrupt("store lock poisoned".to_string()))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Records>, RepositoryError> {
        self.records
            .write()
            .map_err(|_| RepositoryError::Corrupt("store lock poisoned".to_string()))
    }
}

impl CurrencyRepository for JsonFileCurrencyRepository {
    fn fetch_all_currencies(&self) -> Result<Vec<CurrencyRecord>, RepositoryError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn upsert_currencies(&self, records: &[CurrencyRecord]) -> Result<(), RepositoryError> {
        let mut guard = self.write_lock()?;
        let mut next = guard.clone();
        for record in records {
            next.insert(record.code.clone(), record.clone());
        }
        self.write(&next)?;
        *guard = next;
        debug!(path = %self.path.display(), count = records.len(), "Currencies upserted");
        Ok(())
    }
}
