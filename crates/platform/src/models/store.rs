//! Store record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storerate_core::{AccountId, Email, StoreId};

/// A registered store.
///
/// Created only together with its owning account (see the Store Registry).
/// `overall_rating` and `total_ratings` are derived values: the Rating
/// Ledger recomputes them from the full rating set on every change and
/// records them here for fast reads. Nothing else may write them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Store {
    /// Unique store ID.
    pub id: StoreId,
    /// Store name, shared with the owner account's display name.
    pub name: String,
    /// Contact email, shared with the owner account.
    pub contact_email: Email,
    /// Store address.
    pub address: String,
    /// The owning `store_owner` account.
    pub owner_id: AccountId,
    /// Mean of all ratings for this store, rounded to 1 decimal place.
    pub overall_rating: Decimal,
    /// Number of ratings for this store.
    pub total_ratings: u32,
}

impl Store {
    /// Create a store with an empty aggregate.
    #[must_use]
    pub fn new(name: String, contact_email: Email, address: String, owner_id: AccountId) -> Self {
        Self {
            id: StoreId::generate(),
            name,
            contact_email,
            address,
            owner_id,
            overall_rating: Decimal::ZERO,
            total_ratings: 0,
        }
    }
}
