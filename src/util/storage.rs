//! Durable key-value storage backends for client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth store persists through `KeyValueStorage` rather than calling
//! `web-sys` directly, so the same store logic runs against `localStorage`
//! in the browser and against an in-process map natively and in tests.
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade to "absent" like the Web Storage API does for missing keys.
//! Writes and removals report failures so callers can surface them.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove key {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// String-keyed, string-valued persistence mirroring the Web Storage API.
pub trait KeyValueStorage: Send + Sync {
    /// Read `key`; missing keys and read failures both yield `None`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backend rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================
// MemoryStorage
// =============================================================

/// In-process storage used natively and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

// =============================================================
// BrowserStorage
// =============================================================

/// `window.localStorage`, looked up on every call.
///
/// Holding no `web-sys` handle keeps the backend `Send + Sync` so it can sit
/// inside Leptos context.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: format!("{e:?}") })
    }
}

/// Storage backend for the current build: `localStorage` in the browser,
/// an empty in-process map otherwise.
pub fn default_storage() -> Arc<dyn KeyValueStorage> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryStorage::new())
    }
}
