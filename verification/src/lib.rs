//! Verification policy: who may verify a report, and what a verification is
//! worth.
//!
//! The eligibility engine runs the ordered gates (distance, duplicate, daily
//! cap, cooldown) against the caller's ledger history without mutating
//! anything. The scoring engine turns distance and trust into per-record
//! scores and folds a report's records into its aggregate summary.

pub mod eligibility;
pub mod scoring;

pub use eligibility::{DenyReason, EligibilityDecision, EligibilityEngine};
pub use scoring::{ScoringEngine, VerificationSummary};
