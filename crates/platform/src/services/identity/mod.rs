//! Identity service.
//!
//! Owns the account collection: registration with email uniqueness, and
//! credential resolution including the seeded administrator.

mod error;

pub use error::IdentityError;

use tracing::{debug, info};

use storerate_core::{AccountId, Address, Credential, DisplayName, Email, Role};

use crate::config::AdminSeed;
use crate::db::{AccountRepository, RepositoryError};
use crate::models::Account;
use crate::storage::StoragePort;

/// Identity service.
///
/// Handles account registration and login-time credential resolution.
pub struct IdentityService<'a, S: StoragePort> {
    accounts: AccountRepository<'a, S>,
    admin: &'a AdminSeed,
}

impl<'a, S: StoragePort> IdentityService<'a, S> {
    /// Create a new identity service.
    #[must_use]
    pub const fn new(storage: &'a S, admin: &'a AdminSeed) -> Self {
        Self {
            accounts: AccountRepository::new(storage),
            admin,
        }
    }

    /// Register a new visitor account (role `user`).
    ///
    /// Field validation mirrors the signup form: name 20-60 characters,
    /// `local@domain.tld` email, address at most 400 characters, credential
    /// 8-16 characters with an uppercase letter and a special character.
    ///
    /// # Errors
    ///
    /// Returns a validation variant if any field fails its rule.
    /// Returns `IdentityError::DuplicateEmail` if any account (or the
    /// seeded administrator) already uses the email, case-insensitively;
    /// the collection is unchanged in that case.
    pub fn register(
        &self,
        email: &str,
        credential: &str,
        display_name: &str,
        address: &str,
    ) -> Result<Account, IdentityError> {
        self.create_account(email, credential, display_name, address, Role::User)
    }

    /// Register a store-owner account.
    ///
    /// Called by the Store Registry as the first half of its compound
    /// add-store operation; validation and uniqueness are identical to
    /// [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// As [`register`](Self::register).
    pub fn register_store_owner(
        &self,
        email: &str,
        credential: &str,
        display_name: &str,
        address: &str,
    ) -> Result<Account, IdentityError> {
        self.create_account(email, credential, display_name, address, Role::StoreOwner)
    }

    fn create_account(
        &self,
        email: &str,
        credential: &str,
        display_name: &str,
        address: &str,
        role: Role,
    ) -> Result<Account, IdentityError> {
        // Validate in the order the forms do: name, email, address, password.
        let display_name = DisplayName::parse(display_name)?;
        let email = Email::parse(email)?;
        let address = Address::parse(address)?;
        let credential = Credential::parse(credential)?;

        // The seeded administrator is resolvable at login, so its email
        // counts as taken even though it is never persisted.
        if self.admin.email().eq_ignore_case(&email) {
            return Err(IdentityError::DuplicateEmail);
        }

        let account = Account {
            id: AccountId::generate(),
            email,
            credential,
            display_name: display_name.into_inner(),
            role,
            address: address.into_inner(),
        };

        let account = self.accounts.insert(account).map_err(|e| match e {
            RepositoryError::Conflict(_) => IdentityError::DuplicateEmail,
            other => IdentityError::Repository(other),
        })?;

        info!(account_id = %account.id, role = %account.role, "Registered account");
        Ok(account)
    }

    /// Resolve a login to an account.
    ///
    /// The seeded administrator is checked first and always resolves,
    /// regardless of the persisted collection. Email lookup is
    /// case-insensitive; the credential is an exact opaque-string match.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::InvalidEmail`/`InvalidCredential` if the
    /// submitted fields fail shape validation.
    /// Returns `IdentityError::InvalidCredentials` if no account matches.
    pub fn authenticate(&self, email: &str, credential: &str) -> Result<Account, IdentityError> {
        let email = Email::parse(email)?;
        let credential = Credential::parse(credential)?;

        if self.admin.matches(&email, credential.as_str()) {
            debug!("Resolved seeded administrator");
            return Ok(self.admin.account());
        }

        let account = self
            .accounts
            .find_by_email(&email)?
            .filter(|a| a.credential == credential)
            .ok_or(IdentityError::InvalidCredentials)?;

        debug!(account_id = %account.id, "Authenticated account");
        Ok(account)
    }

    /// Snapshot of every registered account, in insertion order.
    ///
    /// No caching; callers re-read on each render and get whatever is
    /// persisted at that moment.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::Repository` if the collection cannot be
    /// read.
    pub fn accounts(&self) -> Result<Vec<Account>, IdentityError> {
        Ok(self.accounts.load_all()?)
    }
}
