//! Core types for StoreRate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod email;
pub mod id;
pub mod profile;
pub mod rating;
pub mod role;

pub use credential::{Credential, CredentialError};
pub use email::{Email, EmailError};
pub use id::*;
pub use profile::{Address, AddressError, DisplayName, DisplayNameError};
pub use rating::{RatingValue, RatingValueError};
pub use role::Role;
