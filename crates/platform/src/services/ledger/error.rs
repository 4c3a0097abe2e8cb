//! Ledger error types.

use thiserror::Error;

use storerate_core::{RatingValueError, StoreId};

use crate::db::RepositoryError;

/// Errors that can occur during rating ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The submitted value is not an integer in `[1, 5]`.
    #[error("invalid rating value: {0}")]
    InvalidValue(#[from] RatingValueError),

    /// The rated store does not exist, so there is no record to carry the
    /// aggregate.
    #[error("no store with id {0}")]
    UnknownStore(StoreId),

    /// Repository/storage error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
