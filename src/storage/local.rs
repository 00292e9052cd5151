//! Local filesystem storage implementation.
//!
//! Writes go to a temporary sibling file that is then renamed over the
//! record file, so a failed run never leaves a half-written store behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, Result};
use crate::models::{Config, DiscoveryRecord};
use crate::storage::RecordStorage;

const DEFAULT_RECORDS_FILE: &str = "files-data.json";

/// Local filesystem storage backend.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root_dir: PathBuf,
    records_key: String,
}

impl LocalStorage {
    /// Create a LocalStorage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self::with_records_file(root_dir, DEFAULT_RECORDS_FILE)
    }

    /// Create a LocalStorage with a custom record file name.
    pub fn with_records_file(root_dir: impl Into<PathBuf>, records_key: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            records_key: records_key.into(),
        }
    }

    /// Create a LocalStorage using the record file named in `config`.
    pub fn from_config(root_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self::with_records_file(root_dir, config.paths.records_file.clone())
    }

    /// Full path of the record file.
    pub fn records_path(&self) -> PathBuf {
        self.path(&self.records_key)
    }

    /// Get the full path for a relative key.
    fn path(&self, key: &str) -> PathBuf {
        self.root_dir.join(key)
    }

    /// Ensure parent directory exists.
    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path(key);
        self.ensure_dir(&path)?;

        let tmp = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Write JSON data, indented and with non-ASCII text left as-is.
    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');
        self.write_bytes(key, &bytes)
    }

    /// Read bytes, returning None if file doesn't exist.
    fn read_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path(key);
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Read JSON data.
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_bytes(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

impl RecordStorage for LocalStorage {
    fn load_all(&self) -> Vec<DiscoveryRecord> {
        match self.read_json::<Vec<DiscoveryRecord>>(&self.records_key) {
            Ok(Some(records)) => {
                if records.is_empty() {
                    log::warn!("No records found in {}", self.location());
                }
                records
            }
            Ok(None) => {
                log::warn!("Record file {} does not exist yet", self.location());
                Vec::new()
            }
            Err(e) => {
                log::warn!(
                    "Record file {} could not be read ({}); treating it as empty",
                    self.location(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[DiscoveryRecord]) -> Result<()> {
        self.write_json(&self.records_key, records)?;
        log::debug!("Wrote {} records to {}", records.len(), self.location());
        Ok(())
    }

    fn location(&self) -> String {
        self.records_path().display().to_string()
    }
}
