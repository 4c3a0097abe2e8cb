//! Store registry service.
//!
//! Owns the store collection. A store never exists alone: it is created in
//! one compound operation together with its owning `store_owner` account,
//! sharing the submitted name, email, and address.

mod error;

pub use error::RegistryError;

use tracing::{info, warn};

use storerate_core::AccountId;

use crate::config::AdminSeed;
use crate::db::{AccountRepository, StoreRepository};
use crate::models::Store;
use crate::services::IdentityService;
use crate::storage::StoragePort;

/// Store registry service.
pub struct StoreRegistry<'a, S: StoragePort> {
    identity: IdentityService<'a, S>,
    accounts: AccountRepository<'a, S>,
    stores: StoreRepository<'a, S>,
}

impl<'a, S: StoragePort> StoreRegistry<'a, S> {
    /// Create a new store registry.
    #[must_use]
    pub const fn new(storage: &'a S, admin: &'a AdminSeed) -> Self {
        Self {
            identity: IdentityService::new(storage, admin),
            accounts: AccountRepository::new(storage),
            stores: StoreRepository::new(storage),
        }
    }

    /// Add a store together with its owning account.
    ///
    /// Compound and atomic: the owner account (role `store_owner`) is
    /// registered first; if that fails nothing is persisted. If the store
    /// write fails afterwards, the prior accounts snapshot is restored so
    /// either both records exist or neither does. The new store starts with
    /// an empty aggregate (`overall_rating = 0`, `total_ratings = 0`).
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Identity` for validation failures or a
    /// duplicate owner email.
    /// Returns `RegistryError::Repository` for substrate failures.
    pub fn add_store(
        &self,
        name: &str,
        owner_email: &str,
        owner_credential: &str,
        address: &str,
    ) -> Result<Store, RegistryError> {
        // Snapshot taken before the owner write so a failed store write can
        // undo the compound operation.
        let prior_accounts = self.accounts.load_all()?;

        let owner = self
            .identity
            .register_store_owner(owner_email, owner_credential, name, address)?;

        let store = Store::new(
            owner.display_name.clone(),
            owner.email.clone(),
            owner.address.clone(),
            owner.id,
        );

        match self.stores.insert(store) {
            Ok(store) => {
                info!(store_id = %store.id, owner_id = %owner.id, "Added store");
                Ok(store)
            }
            Err(err) => {
                warn!(owner_id = %owner.id, "Store write failed; restoring accounts snapshot");
                self.accounts.replace_all(&prior_accounts)?;
                Err(err.into())
            }
        }
    }

    /// Snapshot of every store, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if the collection cannot be
    /// read.
    pub fn list(&self) -> Result<Vec<Store>, RegistryError> {
        Ok(self.stores.load_all()?)
    }

    /// Case-insensitive substring search across name, contact email, and
    /// address, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if the collection cannot be
    /// read.
    pub fn search(&self, term: &str) -> Result<Vec<Store>, RegistryError> {
        let needle = term.to_lowercase();
        let mut stores = self.stores.load_all()?;
        stores.retain(|s| {
            s.name.to_lowercase().contains(&needle)
                || s.contact_email.as_str().to_lowercase().contains(&needle)
                || s.address.to_lowercase().contains(&needle)
        });
        Ok(stores)
    }

    /// The stores owned by an account, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if the collection cannot be
    /// read.
    pub fn stores_for_owner(&self, owner_id: AccountId) -> Result<Vec<Store>, RegistryError> {
        Ok(self.stores.find_by_owner(owner_id)?)
    }
}
