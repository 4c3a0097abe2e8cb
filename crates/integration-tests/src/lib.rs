//! Shared helpers for StoreRate integration tests.
//!
//! Tests exercise the platform end-to-end through the [`Platform`] facade,
//! the same surface the view adapters use. The in-memory backend keeps most
//! tests hermetic; the JSON-file backend is covered by the persistence
//! suite via [`temp_data_dir`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use storerate_core::{Credential, Email};
use storerate_platform::config::AdminSeed;
use storerate_platform::state::Platform;
use storerate_platform::storage::MemoryStorage;

/// The default seeded administrator login.
pub const ADMIN_EMAIL: &str = "admin@storerate.com";
/// The default seeded administrator credential.
pub const ADMIN_PASSWORD: &str = "Admin123!";
/// A credential that satisfies every boundary rule.
pub const VALID_PASSWORD: &str = "Abc12345!";
/// A display name that satisfies the 20-60 character rule.
pub const VALID_NAME: &str = "Jonathan Storefront Smith";

/// The default administrator seed used by the demo deployment.
///
/// # Panics
///
/// Panics if the built-in defaults fail validation (they do not).
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn admin_seed() -> AdminSeed {
    AdminSeed::new(
        Email::parse(ADMIN_EMAIL).unwrap(),
        Credential::parse(ADMIN_PASSWORD).unwrap(),
        "System Admin".to_owned(),
    )
}

/// A fresh platform over empty in-memory storage.
#[must_use]
pub fn memory_platform() -> Platform<MemoryStorage> {
    Platform::new(MemoryStorage::new(), admin_seed())
}

/// A unique data directory under the system temp dir.
///
/// Callers remove it when they are done; leftovers from aborted runs are
/// uniquely named and harmless.
#[must_use]
pub fn temp_data_dir() -> PathBuf {
    std::env::temp_dir().join(format!("storerate-it-{}", uuid::Uuid::new_v4()))
}
