//! Profile field types shared by the signup and add-store forms.
//!
//! The same limits apply to an account's full name and to a store name,
//! because a store is created together with its owning account from one
//! form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error parsing a [`DisplayName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum DisplayNameError {
    /// The input length is outside the allowed range.
    #[error("name must be {min} to {max} characters")]
    WrongLength {
        /// Minimum allowed length.
        min: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

/// A display name (account full name or store name), 20-60 characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Minimum display name length.
    pub const MIN_LENGTH: usize = 20;
    /// Maximum display name length.
    pub const MAX_LENGTH: usize = 60;

    /// Parse a `DisplayName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayNameError::WrongLength`] if the input is shorter
    /// than 20 or longer than 60 characters.
    pub fn parse(s: &str) -> Result<Self, DisplayNameError> {
        let length = s.chars().count();
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&length) {
            return Err(DisplayNameError::WrongLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DisplayName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for DisplayName {
    type Err = DisplayNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error parsing an [`Address`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum AddressError {
    /// The input string is too long.
    #[error("address must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A postal address, at most 400 characters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Maximum address length.
    pub const MAX_LENGTH: usize = 400;

    /// Parse an `Address` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::TooLong`] if the input is longer than 400
    /// characters.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        if s.chars().count() > Self::MAX_LENGTH {
            return Err(AddressError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Address` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
