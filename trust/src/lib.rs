//! Trust profiles: one persisted record per installation.
//!
//! A profile is created lazily with neutral defaults, mutated only by
//! successful verification submissions, and never deleted outside an
//! explicit clear-all wipe. The trust score only goes up in the current
//! policy; decay exists as a documented but inactive parameter.

pub mod error;
pub mod profile;
pub mod store;

pub use error::TrustError;
pub use profile::{TrustProfile, VerificationStats, CURRENT_PROFILE_SCHEMA};
pub use store::TrustProfileStore;
