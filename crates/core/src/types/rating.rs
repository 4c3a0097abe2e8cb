//! Star rating value type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error constructing a [`RatingValue`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValueError {
    /// The value is outside the 1-5 star range.
    #[error("rating must be between {min} and {max} stars, got {value}")]
    OutOfRange {
        /// The rejected value.
        value: u8,
        /// Minimum allowed stars.
        min: u8,
        /// Maximum allowed stars.
        max: u8,
    },
}

/// An integer star rating in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingValue(u8);

impl RatingValue {
    /// Minimum stars.
    pub const MIN: u8 = 1;
    /// Maximum stars.
    pub const MAX: u8 = 5;

    /// Create a `RatingValue`, rejecting values outside `[1, 5]`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingValueError::OutOfRange`] for 0 or anything above 5.
    pub const fn new(value: u8) -> Result<Self, RatingValueError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(RatingValueError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Get the number of stars.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = RatingValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
