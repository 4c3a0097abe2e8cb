//! Rating commands: submit a rating, list a store's ratings.

use tracing::info;

use storerate_core::StoreId;
use storerate_platform::state::Platform;
use storerate_platform::storage::StoragePort;

/// Sign in and rate a store.
///
/// Resubmitting for the same store replaces the previous rating.
///
/// # Errors
///
/// Returns an error if login fails, the store ID is malformed or unknown,
/// the star value is out of range, or storage fails.
pub fn submit<S: StoragePort>(
    platform: &Platform<S>,
    email: &str,
    password: &str,
    store: &str,
    stars: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let account = platform.identity().authenticate(email, password)?;
    let store_id: StoreId = store.parse()?;

    let store = platform
        .ledger()
        .submit_rating(account.id, store_id, stars)?;

    info!(
        "Rating submitted! You rated {} {} star(s).",
        store.name, stars
    );
    info!(
        "  Overall rating is now {} across {} review(s).",
        store.overall_rating, store.total_ratings
    );
    Ok(())
}

/// Show the ratings submitted for a store, joined with rater names.
///
/// # Errors
///
/// Returns an error if the store ID is malformed or a collection cannot be
/// read.
pub fn list<S: StoragePort>(
    platform: &Platform<S>,
    store: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store_id: StoreId = store.parse()?;

    let ratings = platform.ledger().ratings_for(store_id)?;
    if ratings.is_empty() {
        info!("No ratings yet. Encourage customers to rate this store!");
        return Ok(());
    }

    // View-side join: resolve rater names from the accounts snapshot.
    let accounts = platform.identity().accounts()?;

    info!("{} rating(s):", ratings.len());
    for rating in &ratings {
        let rater = accounts
            .iter()
            .find(|a| a.id == rating.user_id)
            .map_or("(unknown account)", |a| a.display_name.as_str());
        info!(
            "  {} star(s) by {} on {}",
            rating.value, rater, rating.submitted_on
        );
    }
    Ok(())
}
