//! Collection repositories over the storage port.
//!
//! Each repository borrows a [`StoragePort`](crate::storage::StoragePort)
//! and reads or replaces one collection wholesale (load-modify-save).
//! Repositories enforce no business rules beyond record identity and email
//! uniqueness; the services in [`crate::services`] own the rest.

pub mod accounts;
pub mod ratings;
pub mod stores;

pub use accounts::AccountRepository;
pub use ratings::RatingRepository;
pub use stores::StoreRepository;

use thiserror::Error;

use crate::storage::StorageError;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The persistence substrate failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Requested record was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}
