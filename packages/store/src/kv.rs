//! # Key-value persistence
//!
//! The front-end persists very little: the signed-in user and the chosen
//! language. Both go through [`KeyValueStore`], a synchronous string store
//! shaped after the browser's `localStorage`.
//!
//! | Implementation | Used on |
//! |----------------|---------|
//! | [`crate::MemoryStore`] | native builds and tests |
//! | `LocalStore` | the web (WASM + `web` feature), backed by `window.localStorage` |
//!
//! Reads never fail: a missing or unreadable key is `None`. Writes report
//! [`StorageError`] so callers can log them.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

/// Read a JSON value. Malformed JSON is logged and treated as absent.
pub fn get_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("ignoring malformed value under {key}: {e}");
            None
        }
    }
}

/// Write a value as JSON.
pub fn set_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}
