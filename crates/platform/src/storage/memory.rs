//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Collection, StorageError, StoragePort};

/// In-process storage backend.
///
/// Collections are held as serialized JSON documents so that records take
/// the same encode/decode path as the file backend. Nothing survives the
/// process; this is the unit-test fake and the backend for ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    collections: RwLock<HashMap<Collection, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StorageError> {
        let collections = self
            .collections
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        match collections.get(&collection) {
            None => Ok(Vec::new()),
            Some(document) => {
                serde_json::from_str(document).map_err(|e| StorageError::Corrupt {
                    collection,
                    detail: e.to_string(),
                })
            }
        }
    }

    fn save<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> Result<(), StorageError> {
        let document = serde_json::to_string(records)
            .map_err(|e| StorageError::Unavailable(format!("cannot encode {collection}: {e}")))?;

        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(collection, document);

        tracing::debug!(collection = %collection, records = records.len(), "Saved collection");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent_collection_is_empty() {
        let storage = MemoryStorage::new();
        let records: Vec<String> = storage.load(Collection::Accounts).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let storage = MemoryStorage::new();
        let records = vec!["a".to_owned(), "b".to_owned()];

        storage.save(Collection::Stores, &records).unwrap();
        let loaded: Vec<String> = storage.load(Collection::Stores).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_save_replaces_whole_collection() {
        let storage = MemoryStorage::new();
        storage
            .save(Collection::Ratings, &["old".to_owned()])
            .unwrap();
        storage
            .save(Collection::Ratings, &["new".to_owned()])
            .unwrap();

        let loaded: Vec<String> = storage.load(Collection::Ratings).unwrap();
        assert_eq!(loaded, vec!["new".to_owned()]);
    }

    #[test]
    fn test_collections_are_independent() {
        let storage = MemoryStorage::new();
        storage
            .save(Collection::Accounts, &["account".to_owned()])
            .unwrap();

        let stores: Vec<String> = storage.load(Collection::Stores).unwrap();
        assert!(stores.is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let storage = MemoryStorage::new();
        storage.save(Collection::Accounts, &[1, 2, 3]).unwrap();

        let result: Result<Vec<String>, _> = storage.load(Collection::Accounts);
        assert!(matches!(
            result,
            Err(StorageError::Corrupt {
                collection: Collection::Accounts,
                ..
            })
        ));
    }
}
