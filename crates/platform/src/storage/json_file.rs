//! JSON-file storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{Collection, StorageError, StoragePort};

/// File-backed storage: one JSON document per collection under a data
/// directory (`accounts.json`, `stores.json`, `ratings.json`).
///
/// Saves replace the whole document via write-then-rename, so a crash
/// mid-save leaves the previous document intact. Concurrent processes are
/// not coordinated; the last writer wins.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Open (creating if needed) a data directory.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the directory cannot be
    /// created.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            StorageError::Unavailable(format!(
                "cannot create data directory {}: {e}",
                data_dir.display()
            ))
        })?;
        Ok(Self { data_dir })
    }

    /// The directory holding the collection documents.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }
}

impl StoragePort for JsonFileStorage {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StorageError> {
        let path = self.path_for(collection);

        let document = match fs::read_to_string(&path) {
            Ok(document) => document,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Unavailable(format!(
                    "cannot read {}: {e}",
                    path.display()
                )));
            }
        };

        serde_json::from_str(&document).map_err(|e| StorageError::Corrupt {
            collection,
            detail: e.to_string(),
        })
    }

    fn save<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(records)
            .map_err(|e| StorageError::Unavailable(format!("cannot encode {collection}: {e}")))?;

        let path = self.path_for(collection);
        let tmp = self.data_dir.join(format!("{collection}.json.tmp"));

        fs::write(&tmp, document).map_err(|e| {
            StorageError::Unavailable(format!("cannot write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            StorageError::Unavailable(format!("cannot replace {}: {e}", path.display()))
        })?;

        debug!(collection = %collection, records = records.len(), path = %path.display(), "Saved collection");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_storage() -> JsonFileStorage {
        let dir = std::env::temp_dir().join(format!("storerate-test-{}", uuid::Uuid::new_v4()));
        JsonFileStorage::open(dir).unwrap()
    }

    #[test]
    fn test_load_absent_collection_is_empty() {
        let storage = temp_storage();
        let records: Vec<String> = storage.load(Collection::Ratings).unwrap();
        assert!(records.is_empty());

        let _ = fs::remove_dir_all(storage.data_dir());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let storage = temp_storage();
        let records = vec!["a".to_owned(), "b".to_owned()];

        storage.save(Collection::Accounts, &records).unwrap();
        let loaded: Vec<String> = storage.load(Collection::Accounts).unwrap();
        assert_eq!(loaded, records);

        let _ = fs::remove_dir_all(storage.data_dir());
    }

    #[test]
    fn test_documents_survive_reopen() {
        let storage = temp_storage();
        storage
            .save(Collection::Stores, &["persisted".to_owned()])
            .unwrap();

        let reopened = JsonFileStorage::open(storage.data_dir()).unwrap();
        let loaded: Vec<String> = reopened.load(Collection::Stores).unwrap();
        assert_eq!(loaded, vec!["persisted".to_owned()]);

        let _ = fs::remove_dir_all(storage.data_dir());
    }

    #[test]
    fn test_corrupt_document_is_reported() {
        let storage = temp_storage();
        fs::write(storage.data_dir().join("accounts.json"), "not json").unwrap();

        let result: Result<Vec<String>, _> = storage.load(Collection::Accounts);
        assert!(matches!(
            result,
            Err(StorageError::Corrupt {
                collection: Collection::Accounts,
                ..
            })
        ));

        let _ = fs::remove_dir_all(storage.data_dir());
    }
}
