//! StoreRate platform library.
//!
//! The rating aggregation and local persistence core: everything with an
//! invariant to maintain lives here, behind an in-process API that view
//! adapters (dashboards, forms, the CLI) call. There is no server - state
//! lives in a local key-value store and derived values are recomputed at
//! write time.
//!
//! # Modules
//!
//! - [`storage`] - the injected `load`/`save` persistence port and its
//!   in-memory and JSON-file backends
//! - [`models`] - the persisted record types (`Account`, `Store`, `Rating`)
//! - [`db`] - thin per-collection repositories over a storage port
//! - [`services`] - the three core components: Identity Store, Store
//!   Registry, Rating Ledger
//! - [`config`] - environment-based configuration and the seeded
//!   administrator
//! - [`state`] - the [`state::Platform`] facade bundling the services

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
