//! Rating record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use storerate_core::{AccountId, RatingId, RatingValue, StoreId};

/// A single user's rating of a single store.
///
/// At most one rating exists per `(user_id, store_id)` pair at any time; a
/// new submission replaces the prior one, keyed by both foreign keys alone,
/// regardless of the old rating's id or date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rating {
    /// Unique rating ID (fresh on every submission, including replacements).
    pub id: RatingId,
    /// The rating user.
    pub user_id: AccountId,
    /// The rated store.
    pub store_id: StoreId,
    /// Stars, 1-5.
    pub value: RatingValue,
    /// Calendar date of the submission.
    pub submitted_on: NaiveDate,
}

impl Rating {
    /// Create a rating with a fresh ID.
    #[must_use]
    pub fn new(
        user_id: AccountId,
        store_id: StoreId,
        value: RatingValue,
        submitted_on: NaiveDate,
    ) -> Self {
        Self {
            id: RatingId::generate(),
            user_id,
            store_id,
            value,
            submitted_on,
        }
    }
}
