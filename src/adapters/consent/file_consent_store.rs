//! File-based Consent Store
//!
//! Persists the analytics consent decision as a small YAML document so the
//! choice survives restarts without a database.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::ConsentStore;

#[derive(Debug, Serialize, Deserialize)]
struct ConsentRecord {
    granted: bool,
    decided_at: Timestamp,
}

/// YAML file holding the consent flag
#[derive(Debug, Clone)]
pub struct FileConsentStore {
    path: PathBuf,
}

impl FileConsentStore {
    /// Create a store backed by `path`; the file is created on first save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent(&self) -> Result<(), DomainError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create consent directory", e)),
            _ => Ok(()),
        }
    }
}

fn storage_error(action: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("Failed to {}: {}", action, err))
}

#[async_trait]
impl ConsentStore for FileConsentStore {
    async fn load(&self) -> Result<Option<bool>, DomainError> {
        let yaml = match fs::read_to_string(&self.path).await {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("read consent file", e)),
        };

        let record: ConsentRecord =
            serde_yaml::from_str(&yaml).map_err(|e| storage_error("parse consent file", e))?;

        Ok(Some(record.granted))
    }

    async fn save(&self, granted: bool) -> Result<(), DomainError> {
        self.ensure_parent().await?;

        let record = ConsentRecord {
            granted,
            decided_at: Timestamp::now(),
        };
        let yaml =
            serde_yaml::to_string(&record).map_err(|e| storage_error("serialize consent", e))?;

        fs::write(&self.path, yaml)
            .await
            .map_err(|e| storage_error("write consent file", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileConsentStore {
        FileConsentStore::new(dir.path().join("nested").join("consent.yaml"))
    }

    #[tokio::test]
    async fn missing_file_means_no_decision() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saved_decision_is_loaded_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(true).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(true));

        store.save(false).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(false));
    }

    #[tokio::test]
    async fn decision_survives_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).save(true).await.unwrap();

        let reopened = store_in(&dir);
        assert_eq!(reopened.load().await.unwrap(), Some(true));
    }

    #[tokio::test]
    async fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("consent.yaml");
        std::fs::write(&path, "granted: [not, a, bool").unwrap();

        let err = FileConsentStore::new(&path).load().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
