//! Rating ledger service.
//!
//! Owns the rating collection and keeps every store's denormalized
//! aggregate consistent with it. Submissions are upserts keyed by
//! `(user, store)`; each one triggers a total recomputation of the affected
//! store's aggregate from the full rating set - never an incremental
//! running average, so repeated updates cannot drift.

mod error;

pub use error::LedgerError;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::info;

use storerate_core::{AccountId, RatingValue, StoreId};

use crate::db::{RatingRepository, StoreRepository};
use crate::models::{Rating, Store};
use crate::storage::StoragePort;

/// Rating ledger service.
pub struct RatingLedger<'a, S: StoragePort> {
    stores: StoreRepository<'a, S>,
    ratings: RatingRepository<'a, S>,
}

impl<'a, S: StoragePort> RatingLedger<'a, S> {
    /// Create a new rating ledger.
    #[must_use]
    pub const fn new(storage: &'a S) -> Self {
        Self {
            stores: StoreRepository::new(storage),
            ratings: RatingRepository::new(storage),
        }
    }

    /// Submit (or replace) a user's rating of a store.
    ///
    /// One atomic logical unit: any prior rating for the `(user, store)`
    /// pair is removed, a fresh rating is inserted dated today, the store's
    /// aggregate is recomputed from all of its ratings, and both
    /// collections are persisted. Returns the store with its updated
    /// aggregate. If the store write fails after the ratings write, the
    /// prior ratings snapshot is restored so no partial effect remains.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidValue` if `value` is outside `[1, 5]`.
    /// Returns `LedgerError::UnknownStore` if the store does not exist.
    /// Returns `LedgerError::Repository` for substrate failures.
    pub fn submit_rating(
        &self,
        user_id: AccountId,
        store_id: StoreId,
        value: u8,
    ) -> Result<Store, LedgerError> {
        let value = RatingValue::new(value)?;

        let mut store = self
            .stores
            .get(store_id)?
            .ok_or(LedgerError::UnknownStore(store_id))?;

        let prior = self.ratings.load_all()?;

        // Upsert: identity is the (user, store) pair, not the rating id.
        let mut ratings = prior.clone();
        ratings.retain(|r| !(r.user_id == user_id && r.store_id == store_id));
        ratings.push(Rating::new(
            user_id,
            store_id,
            value,
            Utc::now().date_naive(),
        ));

        let (overall_rating, total_ratings) = aggregate(&ratings, store_id);
        store.overall_rating = overall_rating;
        store.total_ratings = total_ratings;

        self.ratings.replace_all(&ratings)?;
        if let Err(err) = self.stores.update(&store) {
            self.ratings.replace_all(&prior)?;
            return Err(err.into());
        }

        info!(
            store_id = %store_id,
            user_id = %user_id,
            stars = value.get(),
            overall = %store.overall_rating,
            total = store.total_ratings,
            "Recorded rating"
        );
        Ok(store)
    }

    /// Snapshot of the ratings for one store, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Repository` if the collection cannot be read.
    pub fn ratings_for(&self, store_id: StoreId) -> Result<Vec<Rating>, LedgerError> {
        Ok(self.ratings.for_store(store_id)?)
    }

    /// A user's rating of a store, if they have submitted one.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Repository` if the collection cannot be read.
    pub fn rating_for(
        &self,
        user_id: AccountId,
        store_id: StoreId,
    ) -> Result<Option<Rating>, LedgerError> {
        Ok(self.ratings.find(user_id, store_id)?)
    }
}

/// Recompute a store's aggregate from the full rating set.
///
/// The mean is rounded to one decimal place, half away from zero, the same
/// policy used wherever an aggregate is shown - recomputing over an
/// unchanged set always yields the same decimal. No ratings yields `(0, 0)`.
fn aggregate(ratings: &[Rating], store_id: StoreId) -> (Decimal, u32) {
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for rating in ratings.iter().filter(|r| r.store_id == store_id) {
        sum += Decimal::from(rating.value.get());
        count += 1;
    }

    if count == 0 {
        return (Decimal::ZERO, 0);
    }

    let mean = sum / Decimal::from(count);
    (
        mean.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
        count,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use storerate_core::Email;

    use super::*;
    use crate::db::StoreRepository;
    use crate::storage::MemoryStorage;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn seed_store(storage: &MemoryStorage) -> Store {
        let store = Store::new(
            "Downtown Coffee Shop Central".to_owned(),
            Email::parse("owner@x.com").unwrap(),
            "123 Main St".to_owned(),
            AccountId::generate(),
        );
        StoreRepository::new(storage).insert(store).unwrap()
    }

    #[test]
    fn test_submit_rating_updates_aggregate() {
        let storage = MemoryStorage::new();
        let store = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);

        let updated = ledger
            .submit_rating(AccountId::generate(), store.id, 5)
            .unwrap();
        assert_eq!(updated.overall_rating, dec("5.0"));
        assert_eq!(updated.total_ratings, 1);
    }

    #[test]
    fn test_resubmission_replaces_prior_rating() {
        let storage = MemoryStorage::new();
        let store = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);
        let user = AccountId::generate();

        ledger.submit_rating(user, store.id, 5).unwrap();
        let updated = ledger.submit_rating(user, store.id, 2).unwrap();

        // Exactly one rating for the pair, with the second value.
        assert_eq!(updated.total_ratings, 1);
        assert_eq!(updated.overall_rating, dec("2.0"));
        let rating = ledger.rating_for(user, store.id).unwrap().unwrap();
        assert_eq!(rating.value.get(), 2);
        assert_eq!(ledger.ratings_for(store.id).unwrap().len(), 1);
    }

    #[test]
    fn test_two_users_average() {
        let storage = MemoryStorage::new();
        let store = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);

        ledger
            .submit_rating(AccountId::generate(), store.id, 4)
            .unwrap();
        let updated = ledger
            .submit_rating(AccountId::generate(), store.id, 5)
            .unwrap();

        assert_eq!(updated.overall_rating, dec("4.5"));
        assert_eq!(updated.total_ratings, 2);
    }

    #[test]
    fn test_many_fives_stay_exact() {
        let storage = MemoryStorage::new();
        let store = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);

        let mut updated = None;
        for _ in 0..7 {
            updated = Some(
                ledger
                    .submit_rating(AccountId::generate(), store.id, 5)
                    .unwrap(),
            );
        }

        let updated = updated.unwrap();
        assert_eq!(updated.overall_rating, dec("5.0"));
        assert_eq!(updated.total_ratings, 7);
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let storage = MemoryStorage::new();
        let store = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);

        for bad in [0, 6] {
            let result = ledger.submit_rating(AccountId::generate(), store.id, bad);
            assert!(matches!(result, Err(LedgerError::InvalidValue(_))));
        }
        assert!(ledger.ratings_for(store.id).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_store_is_rejected() {
        let storage = MemoryStorage::new();
        let ledger = RatingLedger::new(&storage);

        let result = ledger.submit_rating(AccountId::generate(), StoreId::generate(), 3);
        assert!(matches!(result, Err(LedgerError::UnknownStore(_))));
    }

    #[test]
    fn test_ratings_only_affect_their_store() {
        let storage = MemoryStorage::new();
        let first = seed_store(&storage);
        let second = seed_store(&storage);
        let ledger = RatingLedger::new(&storage);

        ledger
            .submit_rating(AccountId::generate(), first.id, 1)
            .unwrap();
        let updated = ledger
            .submit_rating(AccountId::generate(), second.id, 5)
            .unwrap();

        assert_eq!(updated.overall_rating, dec("5.0"));
        assert_eq!(updated.total_ratings, 1);
        assert_eq!(ledger.ratings_for(first.id).unwrap().len(), 1);
    }

    fn rating(store_id: StoreId, value: u8) -> Rating {
        Rating::new(
            AccountId::generate(),
            store_id,
            RatingValue::new(value).unwrap(),
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
        )
    }

    #[test]
    fn test_aggregate_rounds_half_away_from_zero() {
        let store_id = StoreId::generate();
        // Mean 4.25 rounds up to 4.3, not to even.
        let ratings: Vec<Rating> = [4, 4, 4, 5].iter().map(|&v| rating(store_id, v)).collect();
        let (overall, total) = aggregate(&ratings, store_id);
        assert_eq!(overall, dec("4.3"));
        assert_eq!(total, 4);
    }

    #[test]
    fn test_aggregate_rounds_down_below_midpoint() {
        let store_id = StoreId::generate();
        // Mean 13/3 = 4.333... rounds to 4.3.
        let ratings: Vec<Rating> = [4, 4, 5].iter().map(|&v| rating(store_id, v)).collect();
        let (overall, _) = aggregate(&ratings, store_id);
        assert_eq!(overall, dec("4.3"));
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let (overall, total) = aggregate(&[], StoreId::generate());
        assert_eq!(overall, Decimal::ZERO);
        assert_eq!(total, 0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let store_id = StoreId::generate();
        let ratings: Vec<Rating> = [2, 3, 3].iter().map(|&v| rating(store_id, v)).collect();

        let first = aggregate(&ratings, store_id);
        let second = aggregate(&ratings, store_id);
        assert_eq!(first, second);
    }
}
