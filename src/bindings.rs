//! JavaScript bindings for the host page (WASM only)
//!
//! The page constructs one [`Shelf`], renders from [`Shelf::collection_json`],
//! and calls the mutation methods from its form, list, and reset handlers. A
//! `true` return means the collection changed and the page should re-render.

use wasm_bindgen::prelude::*;

use crate::gem::RawGem;
use crate::platform::LocalStorage;
use crate::shelf::GemShelf;
use crate::store::CollectionStore;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
}

/// Handle to the live collection, held by the host page for the session.
#[wasm_bindgen]
pub struct Shelf {
    inner: GemShelf<LocalStorage>,
}

#[wasm_bindgen]
impl Shelf {
    /// Load the stored collection (or the starter set) from LocalStorage.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Shelf {
        Shelf {
            inner: GemShelf::load(CollectionStore::new(LocalStorage)),
        }
    }

    /// The full collection as a JSON array, for rendering.
    pub fn collection_json(&self) -> String {
        serde_json::to_string(self.inner.gems()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add a gem from raw form fields. Returns `true` when it was accepted.
    pub fn add(
        &mut self,
        title: String,
        description: String,
        url: String,
        color: String,
        size: String,
    ) -> bool {
        self.inner.add(RawGem {
            id: None,
            title: Some(title),
            description: Some(description),
            url: Some(url),
            color: Some(color),
            size: Some(size),
        })
    }

    /// Remove the gem with the given id. Returns `true` when one was removed.
    pub fn remove(&mut self, id: String) -> bool {
        self.inner.remove(&id)
    }

    /// Restore the starter collection.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Persist the current collection; the page calls this on `beforeunload`.
    pub fn flush(&mut self) {
        self.inner.flush();
    }
}

impl Default for Shelf {
    fn default() -> Self {
        Self::new()
    }
}
