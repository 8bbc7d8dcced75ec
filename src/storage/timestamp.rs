//! "Last updated" timestamp persistence
//!
//! Stored in last_update.json as an RFC 3339 UTC instant.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

use super::file_io::{read_json_or_default, remove_file_if_exists, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LastUpdateData {
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

/// Repository for the single "last updated" instant
pub struct LastUpdateRepository {
    path: PathBuf,
    value: RwLock<Option<DateTime<Utc>>>,
}

impl LastUpdateRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            value: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), FinanceError> {
        let data: LastUpdateData = read_json_or_default(&self.path);

        let mut value = self
            .value
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *value = data.last_updated;
        Ok(())
    }

    pub fn get(&self) -> Result<Option<DateTime<Utc>>, FinanceError> {
        let value = self
            .value
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*value)
    }

    /// Record and persist a new instant
    pub fn set(&self, at: DateTime<Utc>) -> Result<(), FinanceError> {
        {
            let mut value = self.value.write().map_err(|e| {
                FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *value = Some(at);
        }

        write_json_atomic(
            &self.path,
            &LastUpdateData {
                last_updated: Some(at),
            },
        )
    }

    pub fn clear(&self) -> Result<(), FinanceError> {
        {
            let mut value = self.value.write().map_err(|e| {
                FinanceError::Storage(format!("Failed to acquire write lock: {}", e))
            })?;
            *value = None;
        }
        remove_file_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_absent_until_set() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LastUpdateRepository::new(temp_dir.path().join("last_update.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), None);
    }

    #[test]
    fn test_set_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("last_update.json");
        let at = Utc.with_ymd_and_hms(2024, 6, 20, 14, 30, 0).unwrap();

        let repo = LastUpdateRepository::new(path.clone());
        repo.set(at).unwrap();

        let reloaded = LastUpdateRepository::new(path.clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap(), Some(at));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("2024-06-20T14:30:00Z"));
    }

    #[test]
    fn test_corrupt_file_loads_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("last_update.json");
        std::fs::write(&path, "{\"last_updated\": \"yesterday\"}").unwrap();

        let repo = LastUpdateRepository::new(path);
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), None);
    }
}
