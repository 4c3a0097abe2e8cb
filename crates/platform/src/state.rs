//! Platform facade shared across view adapters.

use crate::config::AdminSeed;
use crate::db::{AccountRepository, RatingRepository, RepositoryError, StoreRepository};
use crate::services::{IdentityService, RatingLedger, StoreRegistry};
use crate::storage::StoragePort;

/// Counts shown on the administrator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformStats {
    /// Registered accounts (the seeded administrator is not counted).
    pub total_users: usize,
    /// Registered stores.
    pub total_stores: usize,
    /// Submitted ratings.
    pub total_ratings: usize,
}

/// The platform: one storage port plus the administrator seed, handing out
/// per-operation service values.
///
/// Services borrow the port and are cheap to construct, so adapters take a
/// fresh one for each action rather than holding state between renders.
pub struct Platform<S: StoragePort> {
    storage: S,
    admin: AdminSeed,
}

impl<S: StoragePort> Platform<S> {
    /// Create a platform over a storage port.
    #[must_use]
    pub const fn new(storage: S, admin: AdminSeed) -> Self {
        Self { storage, admin }
    }

    /// Get a reference to the administrator seed.
    #[must_use]
    pub const fn admin(&self) -> &AdminSeed {
        &self.admin
    }

    /// The identity store.
    #[must_use]
    pub const fn identity(&self) -> IdentityService<'_, S> {
        IdentityService::new(&self.storage, &self.admin)
    }

    /// The store registry.
    #[must_use]
    pub const fn registry(&self) -> StoreRegistry<'_, S> {
        StoreRegistry::new(&self.storage, &self.admin)
    }

    /// The rating ledger.
    #[must_use]
    pub const fn ledger(&self) -> RatingLedger<'_, S> {
        RatingLedger::new(&self.storage)
    }

    /// Collection counts for the administrator dashboard.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if any collection cannot be read.
    pub fn stats(&self) -> Result<PlatformStats, RepositoryError> {
        Ok(PlatformStats {
            total_users: AccountRepository::new(&self.storage).load_all()?.len(),
            total_stores: StoreRepository::new(&self.storage).load_all()?.len(),
            total_ratings: RatingRepository::new(&self.storage).load_all()?.len(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use storerate_core::{Credential, Email};

    use super::*;
    use crate::storage::MemoryStorage;

    fn platform() -> Platform<MemoryStorage> {
        let admin = AdminSeed::new(
            Email::parse("admin@storerate.com").unwrap(),
            Credential::parse("Admin123!").unwrap(),
            "System Admin".to_owned(),
        );
        Platform::new(MemoryStorage::new(), admin)
    }

    #[test]
    fn test_stats_count_all_collections() {
        let platform = platform();
        assert_eq!(
            platform.stats().unwrap(),
            PlatformStats {
                total_users: 0,
                total_stores: 0,
                total_ratings: 0,
            }
        );

        let store = platform
            .registry()
            .add_store("A Unique Store Name 1234", "o@x.com", "Abc12345!", "1 St")
            .unwrap();
        platform
            .ledger()
            .submit_rating(storerate_core::AccountId::generate(), store.id, 4)
            .unwrap();

        assert_eq!(
            platform.stats().unwrap(),
            PlatformStats {
                total_users: 1,
                total_stores: 1,
                total_ratings: 1,
            }
        );
    }
}
