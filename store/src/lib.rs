//! Abstract key-value persistence for the Vigil engine.
//!
//! Every storage backend (the on-disk store, the host platform's secure
//! storage bridge, in-memory for testing) implements [`KeyValueStore`].
//! The rest of the workspace depends only on the trait.
//!
//! All persisted values are JSON documents under fixed string keys; the
//! store itself is agnostic to content.

pub mod error;
pub mod fs;
pub mod kv;

pub use error::StoreError;
pub use fs::FileStore;
pub use kv::KeyValueStore;

/// Every key the engine persists starts with this prefix, so a clear-all
/// operation can find its own keys without touching unrelated host data.
pub const KEY_PREFIX: &str = "vigil.";
