//! The live gem collection and its mutation operations
//!
//! `GemShelf` owns the session's collection. Every successful mutation writes
//! the whole collection back to storage before returning, so memory and
//! storage stay consistent between user actions.

use crate::collection::default_collection;
use crate::gem::{Gem, RawGem};
use crate::platform::StorageBackend;
use crate::store::CollectionStore;

pub struct GemShelf<B: StorageBackend> {
    pub store: CollectionStore<B>,
    gems: Vec<Gem>,
}

impl<B: StorageBackend> GemShelf<B> {
    /// Load the collection from the given store.
    pub fn load(store: CollectionStore<B>) -> Self {
        let gems = store.load();
        Self { store, gems }
    }

    /// Current collection, in display order.
    pub fn gems(&self) -> &[Gem] {
        &self.gems
    }

    /// Validate and append a new gem.
    ///
    /// Returns `false` when the input fails validation; the collection and
    /// storage are left untouched, no error is surfaced.
    pub fn add(&mut self, raw: RawGem) -> bool {
        let Some(gem) = raw.normalize() else {
            return false;
        };
        self.gems.push(gem);
        self.store.save(&self.gems);
        true
    }

    /// Remove the first gem with the given id.
    ///
    /// Returns `false` when no gem matches; a miss is a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(index) = self.gems.iter().position(|gem| gem.id == id) else {
            return false;
        };
        self.gems.remove(index);
        self.store.save(&self.gems);
        true
    }

    /// Replace the collection with a fresh copy of the starter set.
    pub fn reset(&mut self) {
        self.gems = default_collection();
        self.store.save(&self.gems);
    }

    /// Persist unconditionally. The host calls this when the session ends,
    /// covering any mutation path that has not written yet.
    pub fn flush(&mut self) {
        self.store.save(&self.gems);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStorage;

    fn shelf() -> GemShelf<MemoryStorage> {
        GemShelf::load(CollectionStore::new(MemoryStorage::new()))
    }

    fn raw(title: &str, url: &str) -> RawGem {
        RawGem {
            title: Some(title.to_string()),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    const KEY: &str = CollectionStore::<MemoryStorage>::STORAGE_KEY;

    #[test]
    fn test_loads_seed_when_storage_is_empty() {
        let shelf = shelf();
        assert_eq!(shelf.gems(), default_collection());
    }

    #[test]
    fn test_add_appends_and_persists() {
        let mut shelf = shelf();
        assert!(shelf.add(raw("New", "https://example.com/new")));

        assert_eq!(shelf.gems().len(), 5);
        assert_eq!(shelf.gems()[4].title, "New");
        assert_eq!(shelf.store.load(), shelf.gems());
    }

    #[test]
    fn test_invalid_add_writes_nothing() {
        let mut shelf = shelf();
        assert!(!shelf.add(raw("", "https://example.com")));
        assert!(!shelf.add(raw("Title", "   ")));

        assert_eq!(shelf.gems(), default_collection());
        // a rejected add must not even touch storage
        assert_eq!(shelf.store.backend.get(KEY), None);
    }

    #[test]
    fn test_remove_existing_persists() {
        let mut shelf = shelf();
        assert!(shelf.remove("gem-music"));

        assert_eq!(shelf.gems().len(), 3);
        assert!(shelf.gems().iter().all(|gem| gem.id != "gem-music"));
        assert_eq!(shelf.store.load(), shelf.gems());
    }

    #[test]
    fn test_remove_missing_is_a_noop() {
        let mut shelf = shelf();
        assert!(!shelf.remove("gem-unknown"));
        assert_eq!(shelf.gems(), default_collection());
        assert_eq!(shelf.store.backend.get(KEY), None);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut shelf = shelf();
        assert!(shelf.remove("gem-blog"));
        assert!(!shelf.remove("gem-blog"));
        assert_eq!(shelf.gems().len(), 3);
    }

    #[test]
    fn test_remove_takes_first_match_only() {
        let mut shelf = shelf();
        let mut dup = raw("Dup", "https://example.com/dup");
        dup.id = Some("gem-dup".to_string());
        assert!(shelf.add(dup.clone()));
        assert!(shelf.add(dup));
        assert_eq!(shelf.gems().len(), 6);

        assert!(shelf.remove("gem-dup"));
        assert_eq!(shelf.gems().len(), 5);
        assert_eq!(shelf.gems()[4].id, "gem-dup");
    }

    #[test]
    fn test_reset_restores_seed() {
        let mut shelf = shelf();
        shelf.add(raw("New", "https://example.com/new"));
        shelf.remove("gem-blog");

        shelf.reset();
        assert_eq!(shelf.gems(), default_collection());
        assert_eq!(shelf.store.load(), default_collection());

        // repeating converges to the same state
        shelf.reset();
        assert_eq!(shelf.gems(), default_collection());
    }

    #[test]
    fn test_flush_persists_current_state() {
        let mut shelf = shelf();
        assert_eq!(shelf.store.backend.get(KEY), None);

        shelf.flush();
        assert_eq!(shelf.store.load(), default_collection());
    }

    #[test]
    fn test_collection_survives_reload() {
        let mut shelf = shelf();
        shelf.add(raw("New", "https://example.com/new"));

        let backend = shelf.store.backend.clone();
        let reloaded = GemShelf::load(CollectionStore::new(backend));
        assert_eq!(reloaded.gems(), shelf.gems());
    }
}
