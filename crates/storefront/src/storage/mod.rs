//! Key/value persistence standing in for browser local storage.
//!
//! # Model
//!
//! Every persisted collection lives under a single key as one JSON blob and
//! is overwritten wholesale on every mutation. There are no migrations, no
//! versioning and no referential integrity between keys.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - process-local map, used by tests and throwaway sessions
//! - [`FileStorage`] - one `<key>.json` file per key inside a data directory
//!
//! Stores and services receive an `Arc<dyn Storage>` so the backend is an
//! injected collaborator rather than ambient global state.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Storage keys for persisted state.
pub mod keys {
    /// Key for the cart line items.
    pub const CART: &str = "cart";

    /// Key for the mock authentication token.
    pub const AUTH_TOKEN: &str = "authToken";

    /// Key for the logged-in user record.
    pub const USER: &str = "user";

    /// Key for the order history.
    pub const ORDERS: &str = "user_orders";
}

/// Errors that can occur when reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be serialized.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters that cannot be mapped to a storage slot.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A previous writer panicked while holding the storage lock.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A string key/value store with whole-value overwrite semantics.
pub trait Storage: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode the JSON blob stored under `key`.
///
/// A missing key yields `T::default()`. A blob that fails to parse is logged
/// and also treated as `T::default()`, so corrupted state degrades to empty
/// state instead of failing the caller.
///
/// # Errors
///
/// Returns `StorageError` only if the backend itself cannot be read.
pub fn load_json<T>(storage: &dyn Storage, key: &str) -> Result<T, StorageError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(T::default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to parse stored data, treating as empty");
            Ok(T::default())
        }
    }
}

/// Encode `value` as JSON and overwrite the blob stored under `key`.
///
/// # Errors
///
/// Returns `StorageError` if serialization or the backend write fails.
pub fn save_json<T>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_owned(),
        source,
    })?;
    storage.set(key, &raw)
}

/// Storage doubles for unit tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::{MemoryStorage, Storage, StorageError};

    /// Memory storage whose writes to one key always fail.
    pub(crate) struct FailingWrites {
        inner: MemoryStorage,
        key: &'static str,
    }

    impl FailingWrites {
        pub(crate) fn on(key: &'static str) -> Self {
            Self {
                inner: MemoryStorage::new(),
                key,
            }
        }

        fn check(&self, key: &str) -> Result<(), StorageError> {
            if key == self.key {
                return Err(StorageError::Io {
                    key: key.to_owned(),
                    source: std::io::Error::other("disk full"),
                });
            }
            Ok(())
        }
    }

    impl Storage for FailingWrites {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.check(key)?;
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }
}
