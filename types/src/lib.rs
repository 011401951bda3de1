//! Fundamental types for the Vigil trust and verification engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: coordinates, identifiers, timestamps, strength/level enums,
//! engine parameters, and the clock abstraction.

pub mod clock;
pub mod coords;
pub mod id;
pub mod level;
pub mod params;
pub mod time;

pub use clock::{Clock, SystemClock};
pub use coords::Coordinates;
pub use id::{IdentityHash, ReportId, VerificationId};
pub use level::{ReportConfidence, TrustLevel, VerificationStrength};
pub use params::TrustParams;
pub use time::Timestamp;
