//! # Browser local storage: web-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`.
//!
//! `LocalStore` is a zero-size handle; every call looks the storage object up
//! again, which the browser answers from its own cache.
//!
//! ## Error handling
//!
//! Reads and removals swallow errors (private browsing modes may deny storage
//! access), so an unavailable store degrades to "signed out" rather than
//! breaking the page. Writes report [`StorageError::Unavailable`].

use web_sys::Storage;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
