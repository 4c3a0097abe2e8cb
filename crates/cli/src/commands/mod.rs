//! CLI command implementations.
//!
//! Each command is a thin view adapter: it opens the platform, performs one
//! core operation, and reports the outcome. Nothing here mutates persisted
//! state directly.

pub mod account;
pub mod rate;
pub mod store;

use tracing::info;

use storerate_platform::config::PlatformConfig;
use storerate_platform::state::Platform;
use storerate_platform::storage::{JsonFileStorage, StoragePort};

/// Open the platform over the configured data directory.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the data directory
/// cannot be created.
pub fn open_platform() -> Result<Platform<JsonFileStorage>, Box<dyn std::error::Error>> {
    let config = PlatformConfig::from_env()?;
    let storage = JsonFileStorage::open(&config.data_dir)?;
    Ok(Platform::new(storage, config.admin))
}

/// Show platform collection counts.
///
/// # Errors
///
/// Returns an error if a collection cannot be read.
pub fn stats<S: StoragePort>(platform: &Platform<S>) -> Result<(), Box<dyn std::error::Error>> {
    let stats = platform.stats()?;

    info!("Platform statistics");
    info!("  Total users: {}", stats.total_users);
    info!("  Total stores: {}", stats.total_stores);
    info!("  Total ratings: {}", stats.total_ratings);
    Ok(())
}
