//! Platform configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit the local demo deployment.
//!
//! - `STORERATE_DATA_DIR` - Directory for collection documents (default: `./data`)
//! - `STORERATE_ADMIN_EMAIL` - Seeded administrator email (default: `admin@storerate.com`)
//! - `STORERATE_ADMIN_PASSWORD` - Seeded administrator credential (default: `Admin123!`)
//! - `STORERATE_ADMIN_NAME` - Seeded administrator display name (default: `System Admin`)

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use storerate_core::{AccountId, Credential, Email, Role};

use crate::models::Account;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_ADMIN_EMAIL: &str = "admin@storerate.com";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin123!";
const DEFAULT_ADMIN_NAME: &str = "System Admin";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Platform configuration.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// Directory the JSON-file backend stores collection documents in.
    pub data_dir: PathBuf,
    /// The seeded administrator account.
    pub admin: AdminSeed,
}

impl PlatformConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an override variable fails validation (the
    /// admin email and credential go through the same parsers as user
    /// input).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("STORERATE_DATA_DIR", DEFAULT_DATA_DIR));
        let admin = AdminSeed::from_env()?;

        Ok(Self { data_dir, admin })
    }
}

/// The well-known administrator account.
///
/// Always resolvable at login regardless of the persisted `accounts`
/// collection, and never written to it. Its email also participates in
/// registration uniqueness, so no persisted account can shadow it.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    email: Email,
    credential: Credential,
    display_name: String,
}

impl AdminSeed {
    /// Create a seed from already-validated parts.
    #[must_use]
    pub const fn new(email: Email, credential: Credential, display_name: String) -> Self {
        Self {
            email,
            credential,
            display_name,
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let email = get_env_or_default("STORERATE_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL);
        let email = Email::parse(&email)
            .map_err(|e| ConfigError::InvalidEnvVar("STORERATE_ADMIN_EMAIL".to_owned(), e.to_string()))?;

        let credential = get_env_or_default("STORERATE_ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD);
        let credential = Credential::parse(&credential).map_err(|e| {
            ConfigError::InvalidEnvVar("STORERATE_ADMIN_PASSWORD".to_owned(), e.to_string())
        })?;

        let display_name = get_env_or_default("STORERATE_ADMIN_NAME", DEFAULT_ADMIN_NAME);

        Ok(Self::new(email, credential, display_name))
    }

    /// The administrator's email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Whether the submitted login matches the seeded administrator.
    ///
    /// Email comparison is case-insensitive (the one folding rule used
    /// everywhere); the credential is an exact opaque-string match.
    #[must_use]
    pub fn matches(&self, email: &Email, credential: &str) -> bool {
        self.email.eq_ignore_case(email) && self.credential.matches(credential)
    }

    /// Synthesize the administrator's account record.
    ///
    /// The ID is fixed (the nil UUID) so repeated logins resolve to the
    /// same identity without anything being persisted.
    #[must_use]
    pub fn account(&self) -> Account {
        Account {
            id: AccountId::from_uuid(Uuid::nil()),
            email: self.email.clone(),
            credential: self.credential.clone(),
            display_name: self.display_name.clone(),
            role: Role::Admin,
            address: String::new(),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn seed() -> AdminSeed {
        AdminSeed::new(
            Email::parse(DEFAULT_ADMIN_EMAIL).unwrap(),
            Credential::parse(DEFAULT_ADMIN_PASSWORD).unwrap(),
            DEFAULT_ADMIN_NAME.to_owned(),
        )
    }

    #[test]
    fn test_matches_is_case_insensitive_on_email_only() {
        let seed = seed();
        let email = Email::parse("Admin@StoreRate.com").unwrap();
        assert!(seed.matches(&email, "Admin123!"));
        assert!(!seed.matches(&email, "admin123!"));
    }

    #[test]
    fn test_account_has_fixed_identity() {
        let seed = seed();
        assert_eq!(seed.account().id, seed.account().id);
        assert_eq!(seed.account().role, Role::Admin);
    }
}
