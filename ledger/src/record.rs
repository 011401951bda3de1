//! The verification record.

use serde::{Deserialize, Serialize};
use vigil_identity::short_digest;
use vigil_types::{IdentityHash, ReportId, Timestamp, VerificationId, VerificationStrength};

/// Schema version written into the persisted ledger document.
pub const CURRENT_LEDGER_SCHEMA: u32 = 1;

/// One successful corroboration of a report by one identity.
///
/// Scores are snapshots taken at submission time; later trust changes do not
/// rewrite history. At most one record exists per (report, verifier) pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub id: VerificationId,
    pub report_id: ReportId,
    pub verifier_hash: IdentityHash,
    pub verification_time: Timestamp,
    /// Normalized closeness to the report location, in [0, 1].
    pub proximity_score: f64,
    /// The verifier's trust score at submission time.
    pub trust_score: f64,
    pub strength: VerificationStrength,
    pub metadata: VerificationMetadata,
}

/// Submission context kept alongside the scores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationMetadata {
    /// Verifier's distance from the report location, in km.
    pub user_distance_km: f64,
    /// Milliseconds between the report's timestamp and this submission.
    /// Zero if the report timestamp is in the future of the local clock.
    pub time_to_verify_ms: u64,
    /// Same as `verifier_hash`; kept in metadata for record self-containment.
    pub device_hash: IdentityHash,
}

impl Verification {
    /// Derive the record id from the submitting device, the report, and the
    /// submission time. Deterministic for identical inputs; the truncated
    /// digest keeps ids short enough for log lines and JSON keys.
    pub fn derive_id(device_id: &str, report_id: &ReportId, now: Timestamp) -> VerificationId {
        VerificationId::new(short_digest(&[
            device_id.as_bytes(),
            report_id.as_str().as_bytes(),
            &now.as_millis().to_be_bytes(),
        ]))
    }

    /// Whether this record has outlived the retention window.
    pub fn is_expired(&self, retention_ms: u64, now: Timestamp) -> bool {
        self.verification_time.has_expired(retention_ms, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_deterministic() {
        let report = ReportId::new("report-1");
        let a = Verification::derive_id("device", &report, Timestamp::new(42));
        let b = Verification::derive_id("device", &report, Timestamp::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn derive_id_varies_with_inputs() {
        let report = ReportId::new("report-1");
        let base = Verification::derive_id("device", &report, Timestamp::new(42));
        assert_ne!(
            base,
            Verification::derive_id("device", &report, Timestamp::new(43))
        );
        assert_ne!(
            base,
            Verification::derive_id("device", &ReportId::new("report-2"), Timestamp::new(42))
        );
        assert_ne!(
            base,
            Verification::derive_id("other", &report, Timestamp::new(42))
        );
    }

    #[test]
    fn expiry_window() {
        let v = Verification {
            id: VerificationId::new("aaaaaaaaaaaaaaaa"),
            report_id: ReportId::new("r"),
            verifier_hash: IdentityHash::new("bbbbbbbbbbbbbbbb"),
            verification_time: Timestamp::new(1_000),
            proximity_score: 1.0,
            trust_score: 0.5,
            strength: VerificationStrength::Medium,
            metadata: VerificationMetadata {
                user_distance_km: 0.0,
                time_to_verify_ms: 0,
                device_hash: IdentityHash::new("bbbbbbbbbbbbbbbb"),
            },
        };
        assert!(!v.is_expired(10_000, Timestamp::new(10_999)));
        assert!(v.is_expired(10_000, Timestamp::new(11_000)));
    }
}
