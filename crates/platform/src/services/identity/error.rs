//! Identity error types.

use thiserror::Error;

use storerate_core::{AddressError, CredentialError, DisplayNameError, EmailError};

use crate::db::RepositoryError;

/// Errors that can occur during identity operations.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Display name failed boundary validation.
    #[error("invalid name: {0}")]
    InvalidDisplayName(#[from] DisplayNameError),

    /// Email failed boundary validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Address failed boundary validation.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Credential failed boundary validation.
    #[error("invalid password: {0}")]
    InvalidCredential(#[from] CredentialError),

    /// An account with this email already exists (case-insensitive).
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Wrong email or credential at login.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Repository/storage error.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
