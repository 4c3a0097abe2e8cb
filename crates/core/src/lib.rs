//! StoreRate Core - Shared types library.
//!
//! This crate provides common types used across all StoreRate components:
//! - `platform` - Rating aggregation and local persistence core
//! - `cli` - Command-line view adapter
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. Every
//! type validates its invariants at construction, so the platform crate can
//! rely on a value existing to mean it is well-formed.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, credentials,
//!   profile fields, rating values, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
