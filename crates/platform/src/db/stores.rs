//! Store repository.

use storerate_core::{AccountId, StoreId};

use super::RepositoryError;
use crate::models::Store;
use crate::storage::{Collection, StoragePort};

/// Repository for the `stores` collection.
pub struct StoreRepository<'a, S: StoragePort> {
    storage: &'a S,
}

impl<'a, S: StoragePort> StoreRepository<'a, S> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load every store, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn load_all(&self) -> Result<Vec<Store>, RepositoryError> {
        Ok(self.storage.load(Collection::Stores)?)
    }

    /// Get a store by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn get(&self, id: StoreId) -> Result<Option<Store>, RepositoryError> {
        Ok(self.load_all()?.into_iter().find(|s| s.id == id))
    }

    /// Load the stores owned by an account, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn find_by_owner(&self, owner_id: AccountId) -> Result<Vec<Store>, RepositoryError> {
        let mut stores = self.load_all()?;
        stores.retain(|s| s.owner_id == owner_id);
        Ok(stores)
    }

    /// Append a new store.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` for substrate failures.
    pub fn insert(&self, store: Store) -> Result<Store, RepositoryError> {
        let mut stores = self.load_all()?;
        stores.push(store.clone());
        self.storage.save(Collection::Stores, &stores)?;
        Ok(store)
    }

    /// Replace an existing store record (matched by ID) in place.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no store has the given ID.
    /// Returns `RepositoryError::Storage` for substrate failures.
    pub fn update(&self, store: &Store) -> Result<(), RepositoryError> {
        let mut stores = self.load_all()?;

        let slot = stores
            .iter_mut()
            .find(|s| s.id == store.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = store.clone();

        Ok(self.storage.save(Collection::Stores, &stores)?)
    }
}
