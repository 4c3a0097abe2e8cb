//! Store commands: add, list, search.

use tracing::info;

use storerate_platform::models::Store;
use storerate_platform::state::Platform;
use storerate_platform::storage::StoragePort;

/// Add a store together with its owner account.
///
/// # Errors
///
/// Returns an error if a field fails validation, the owner email is taken,
/// or storage fails. On failure nothing is persisted.
pub fn add<S: StoragePort>(
    platform: &Platform<S>,
    name: &str,
    owner_email: &str,
    owner_password: &str,
    address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = platform
        .registry()
        .add_store(name, owner_email, owner_password, address)?;

    info!("Store added and owner account created.");
    info!("  Store ID: {}", store.id);
    info!("  Name: {}", store.name);
    info!("  Owner: {} ({})", store.contact_email, store.owner_id);
    Ok(())
}

/// List every store with its aggregate.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn list<S: StoragePort>(platform: &Platform<S>) -> Result<(), Box<dyn std::error::Error>> {
    let stores = platform.registry().list()?;
    print_stores(&stores);
    Ok(())
}

/// Search stores by name, contact email, or address.
///
/// # Errors
///
/// Returns an error if the collection cannot be read.
pub fn search<S: StoragePort>(
    platform: &Platform<S>,
    term: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let stores = platform.registry().search(term)?;
    print_stores(&stores);
    Ok(())
}

fn print_stores(stores: &[Store]) {
    if stores.is_empty() {
        info!("No stores found.");
        return;
    }

    info!("{} store(s):", stores.len());
    for store in stores {
        info!(
            "  {} - {} ({} review(s), rated {})",
            store.id, store.name, store.total_ratings, store.overall_rating
        );
        info!("      {} | {}", store.contact_email, store.address);
    }
}
