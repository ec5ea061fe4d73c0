//! Gem Shelf - a client-side bookmark collection with local persistence
//!
//! Core modules:
//! - `gem`: gem records and input normalization
//! - `collection`: collection-level normalization and the starter set
//! - `platform`: storage backends (LocalStorage on web, in-memory elsewhere)
//! - `store`: durable persistence with starter-set fallback
//! - `shelf`: the live collection and its mutation operations
//! - `bindings`: wasm exports driven by the host page

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod collection;
pub mod gem;
pub mod platform;
pub mod shelf;
pub mod store;

pub use collection::{default_collection, normalize_collection};
pub use gem::{DEFAULT_COLOR, Gem, GemSize, RawGem};
pub use platform::{MemoryStorage, StorageBackend};
pub use shelf::GemShelf;
pub use store::CollectionStore;
