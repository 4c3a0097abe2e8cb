//! Account repository.

use storerate_core::{AccountId, Email};

use super::RepositoryError;
use crate::models::Account;
use crate::storage::{Collection, StoragePort};

/// Repository for the `accounts` collection.
pub struct AccountRepository<'a, S: StoragePort> {
    storage: &'a S,
}

impl<'a, S: StoragePort> AccountRepository<'a, S> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Load every account, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn load_all(&self) -> Result<Vec<Account>, RepositoryError> {
        Ok(self.storage.load(Collection::Accounts)?)
    }

    /// Get an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn get(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        Ok(self.load_all()?.into_iter().find(|a| a.id == id))
    }

    /// Get an account by its email address (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be read.
    pub fn find_by_email(&self, email: &Email) -> Result<Option<Account>, RepositoryError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|a| a.email.eq_ignore_case(email)))
    }

    /// Append a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if an account with the same email
    /// (case-insensitive) already exists; the collection is left unchanged.
    /// Returns `RepositoryError::Storage` for substrate failures.
    pub fn insert(&self, account: Account) -> Result<Account, RepositoryError> {
        let mut accounts = self.load_all()?;

        if accounts.iter().any(|a| a.email.eq_ignore_case(&account.email)) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        accounts.push(account.clone());
        self.storage.save(Collection::Accounts, &accounts)?;
        Ok(account)
    }

    /// Replace the whole collection.
    ///
    /// Used by compound operations to restore a prior snapshot when a later
    /// write fails.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Storage` if the collection cannot be
    /// written.
    pub fn replace_all(&self, accounts: &[Account]) -> Result<(), RepositoryError> {
        Ok(self.storage.save(Collection::Accounts, accounts)?)
    }
}
