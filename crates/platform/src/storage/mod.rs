//! Local persistence substrate.
//!
//! The core never touches files or globals directly; it goes through the
//! [`StoragePort`] trait: three named collections, each persisted as one
//! JSON document, loaded and replaced wholesale.
//!
//! Two backends are provided:
//!
//! - [`MemoryStorage`] - in-process only; the fake used by unit tests and
//!   ephemeral runs
//! - [`JsonFileStorage`] - one JSON file per collection under a data
//!   directory
//!
//! The port makes no promises about concurrent writers: the last `save`
//! wins. Safety relies on the single-threaded, run-to-completion execution
//! model of the callers.

mod json_file;
mod memory;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use core::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// The named collections the core persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Registered accounts (all roles).
    Accounts,
    /// Registered stores with their denormalized aggregates.
    Stores,
    /// Submitted ratings, at most one per `(user, store)` pair.
    Ratings,
}

impl Collection {
    /// Every collection, in a fixed order.
    pub const ALL: [Self; 3] = [Self::Accounts, Self::Stores, Self::Ratings];

    /// The collection's storage key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Stores => "stores",
            Self::Ratings => "ratings",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from the persistence substrate.
///
/// Either kind is fatal to the single action that hit it: the operation
/// aborts, prior persisted state is left untouched, and the core never
/// retries automatically.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store cannot be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A collection exists but its document cannot be decoded.
    #[error("corrupt data in collection `{collection}`: {detail}")]
    Corrupt {
        /// The collection whose document failed to decode.
        collection: Collection,
        /// Decoder detail.
        detail: String,
    },
}

/// Key-value persistence port.
///
/// Implementations store each collection as a single JSON array document.
/// `load` of a collection that was never saved returns an empty sequence;
/// `save` replaces the whole document.
pub trait StoragePort {
    /// Load every record of a collection, or an empty vector if the
    /// collection is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the substrate cannot be
    /// read, or [`StorageError::Corrupt`] if the stored document does not
    /// decode.
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, StorageError>;

    /// Replace a collection with the given records.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the substrate cannot be
    /// written.
    fn save<T: Serialize>(&self, collection: Collection, records: &[T])
    -> Result<(), StorageError>;
}
