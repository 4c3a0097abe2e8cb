//! Core services.
//!
//! The three components with invariants to maintain:
//!
//! - [`identity`] - the account collection: registration uniqueness and
//!   credential resolution
//! - [`registry`] - the store collection: store + owner co-creation,
//!   listing and searching
//! - [`ledger`] - the rating collection: per-pair upsert and aggregate
//!   recomputation
//!
//! Each service borrows the injected storage port for the duration of one
//! operation; every mutation validates, applies, and persists before it
//! returns. View adapters call these and re-read on the next render.

pub mod identity;
pub mod ledger;
pub mod registry;

pub use identity::{IdentityError, IdentityService};
pub use ledger::{LedgerError, RatingLedger};
pub use registry::{RegistryError, StoreRegistry};
