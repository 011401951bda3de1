//! Anonymous per-installation identity.
//!
//! Each installation owns one opaque device id, generated once and persisted
//! for the lifetime of the install. The id itself never appears in records;
//! everything public carries its [`IdentityHash`] — a deterministic, one-way
//! 16-character token. The hash is a pseudonym, not a security boundary:
//! anyone holding the device id can recompute it, and all records from one
//! installation are linkable to each other by design.

pub mod hash;
pub mod provider;

pub use hash::{derive_hash, short_digest};
pub use provider::IdentityProvider;
