//! Submission outcome type.

use serde::{Deserialize, Serialize};
use vigil_ledger::Verification;
use vigil_verification::DenyReason;

/// Result of a `verify_report` call.
///
/// `Denied` is the expected ineligibility path; `Failed` covers internal
/// persistence trouble, with the generic message the UI shows (the cause is
/// logged, not surfaced).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VerifyOutcome {
    /// The verification was recorded; here is the created record.
    Recorded(Verification),
    /// An eligibility gate turned the attempt down.
    Denied(DenyReason),
    /// Something internal went wrong; the submission was not recorded.
    Failed(String),
}

impl VerifyOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }

    /// The created record, if the submission succeeded.
    pub fn record(&self) -> Option<&Verification> {
        match self {
            Self::Recorded(v) => Some(v),
            _ => None,
        }
    }

    /// The denial reason, if an eligibility gate fired.
    pub fn deny_reason(&self) -> Option<&DenyReason> {
        match self {
            Self::Denied(reason) => Some(reason),
            _ => None,
        }
    }
}
