//! Storage platform abstraction
//!
//! Browser builds persist through `window.localStorage`; native builds and
//! the test suite use an in-memory map with the same key-value surface.

use std::collections::HashMap;

/// Minimal string key-value surface shared by browser and native storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// `window.localStorage` (WASM only)
///
/// Reads and writes are best-effort: a missing window or a storage failure
/// behaves like an absent key.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        storage.and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory storage for native builds and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
