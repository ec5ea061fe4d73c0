//! Durable persistence for the gem collection
//!
//! One storage key holds the whole collection as a JSON array. Loading never
//! fails: absent, corrupted, or empty data falls back to a fresh copy of the
//! starter set, so there is always a valid non-empty collection to work with.

use serde_json::Value;

use crate::collection::{default_collection, normalize_collection};
use crate::gem::Gem;
use crate::platform::StorageBackend;

/// Reads and writes the collection under a single storage key.
pub struct CollectionStore<B: StorageBackend> {
    pub backend: B,
}

impl<B: StorageBackend> CollectionStore<B> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "gemshelf-collection";

    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read the stored collection.
    ///
    /// Falls back to the starter set when the key is absent, the value does
    /// not parse, the parsed value is not an array, or no stored record
    /// survives normalization.
    pub fn load(&self) -> Vec<Gem> {
        let Some(stored) = self.backend.get(Self::STORAGE_KEY) else {
            log::info!("No stored collection, using the starter set");
            return default_collection();
        };

        match serde_json::from_str::<Value>(&stored) {
            Ok(Value::Array(records)) => {
                let gems = normalize_collection(records);
                if gems.is_empty() {
                    log::warn!("Stored collection had no valid entries, using the starter set");
                    default_collection()
                } else {
                    log::info!("Loaded {} gems", gems.len());
                    gems
                }
            }
            Ok(_) => {
                log::warn!("Stored collection is not a list, using the starter set");
                default_collection()
            }
            Err(err) => {
                log::warn!("Failed to parse stored collection: {err}");
                default_collection()
            }
        }
    }

    /// Overwrite the stored collection. Fire-and-forget: a write failure is
    /// never surfaced to the caller.
    pub fn save(&mut self, gems: &[Gem]) {
        match serde_json::to_string(gems) {
            Ok(json) => {
                self.backend.set(Self::STORAGE_KEY, &json);
                log::info!("Saved {} gems", gems.len());
            }
            Err(err) => log::warn!("Failed to serialize collection: {err}"),
        }
    }
}
