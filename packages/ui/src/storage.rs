//! Shared key-value store constructor for all platforms.
//!
//! Returns a [`store::KeyValueStore`] backed by:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native** builds: a process-wide [`store::MemoryStore`]

/// Create the platform-appropriate key-value store.
pub fn make_store() -> impl store::KeyValueStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        native_store()
    }
}

/// Native builds share one in-memory map so every handle sees the same keys.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn native_store() -> store::MemoryStore {
    use std::sync::OnceLock;

    static STORE: OnceLock<store::MemoryStore> = OnceLock::new();
    STORE.get_or_init(store::MemoryStore::new).clone()
}
