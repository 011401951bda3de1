//! The public face of the trust engine.
//!
//! The host application constructs one [`TrustService`] at startup over its
//! store and clock, then calls the seven operations the UI consumes:
//! `initialize`, `can_verify_report`, `verify_report`,
//! `get_verification_summary`, `get_user_trust_profile`,
//! `get_verification_stats`, and `clear_all_data`.
//!
//! Nothing here panics or returns an error across the boundary: expected
//! ineligibility travels as a decision value, and persistence failures are
//! logged and flattened to safe defaults so the UI always has something to
//! render.

pub mod outcome;
pub mod service;

pub use outcome::VerifyOutcome;
pub use service::TrustService;
