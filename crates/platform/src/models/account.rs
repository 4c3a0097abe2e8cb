//! Account record.

use serde::{Deserialize, Serialize};

use storerate_core::{AccountId, Credential, Email, Role};

/// A registered identity.
///
/// Created on signup (role `user`) or as part of adding a store (role
/// `store_owner`). The seeded administrator is synthesized from
/// configuration and never appears in the persisted collection.
///
/// Immutable after creation; there are no update or delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Email address, unique across all accounts (case-insensitive).
    pub email: Email,
    /// Login credential, compared as an opaque string.
    pub credential: Credential,
    /// Full name (or the store name, for store owners).
    pub display_name: String,
    /// Which dashboard this account lands on.
    pub role: Role,
    /// Postal address.
    pub address: String,
}
