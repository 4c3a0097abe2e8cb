//! Rating repository.

use storerate_core::{AccountId, StoreId};

use super::RepositoryError;
use crate::models::Rating;
use crate::storage::{Collection, StoragePort};

/// Repository for the `ratings` collection.
pub struct RatingRepository<'a, S: StoragePort> {
    storage: &'a S,
}

impl<'a, S: StoragePort> RatingRepository<'a, S> {
    /// Create a new rating repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load every rating, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn load_all(&self) -> Result<Vec<Rating>, RepositoryError> {
        Ok(self.storage.load(Collection::Ratings)?)
    }

    /// Load the ratings for one store, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn for_store(&self, store_id: StoreId) -> Result<Vec<Rating>, RepositoryError> {
        let mut ratings = self.load_all()?;
        ratings.retain(|r| r.store_id == store_id);
        Ok(ratings)
    }

    /// Get a user's rating for a store, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn find(
        &self,
        user_id: AccountId,
        store_id: StoreId,
    ) -> Result<Option<Rating>, RepositoryError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|r| r.user_id == user_id && r.store_id == store_id))
    }

    /// Replace the whole collection.
    ///
    /// The ledger rewrites the collection on every submission (upsert plus
    /// aggregate recomputation happen against the full set).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// written.
    pub fn replace_all(&self, ratings: &[Rating]) -> Result<(), RepositoryError> {
        Ok(self.storage.save(Collection::Ratings, ratings)?)
    }
}
