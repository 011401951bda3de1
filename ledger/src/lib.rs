//! The verification ledger: every successful corroboration this installation
//! has submitted, persisted as one versioned JSON document.
//!
//! Append-only in normal operation; the only deletion is the lazy retention
//! trim that drops records older than the retention window on the next
//! read or write.

pub mod error;
pub mod ledger;
pub mod record;

pub use error::LedgerError;
pub use ledger::VerificationLedger;
pub use record::{Verification, VerificationMetadata, CURRENT_LEDGER_SCHEMA};
