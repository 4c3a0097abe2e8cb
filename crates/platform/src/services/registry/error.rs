//! Registry error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::IdentityError;

/// Errors that can occur during store registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Owner registration failed (validation or duplicate email); nothing
    /// was persisted.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Repository/storage error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
