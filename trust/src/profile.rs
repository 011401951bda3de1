//! The trust profile record and derived statistics.

use serde::{Deserialize, Serialize};
use vigil_types::{IdentityHash, Timestamp, TrustLevel, TrustParams};

/// Schema version written into every persisted profile.
pub const CURRENT_PROFILE_SCHEMA: u32 = 1;

/// Persisted per-installation trust state, keyed by the identity hash.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrustProfile {
    /// Persisted format version; bump on any incompatible field change.
    pub schema_version: u32,
    /// Public token of the owning installation.
    pub device_hash: IdentityHash,
    /// Reputation in [0, 1]. Starts neutral, rises with participation.
    pub trust_score: f64,
    /// Count of verifications this installation has submitted.
    pub verifications_submitted: u32,
    /// Count of verifications received on this installation's own reports.
    /// Stored for cross-linkage but not updated by any current flow.
    pub verifications_received: u32,
    /// Reserved for future accuracy feedback; never recomputed today.
    pub reliability_score: f64,
    /// When the profile was created.
    pub join_date: Timestamp,
    /// Last successful submission time.
    pub last_activity: Timestamp,
}

impl TrustProfile {
    /// A fresh profile with neutral defaults.
    pub fn new(device_hash: IdentityHash, now: Timestamp, params: &TrustParams) -> Self {
        Self {
            schema_version: CURRENT_PROFILE_SCHEMA,
            device_hash,
            trust_score: params.initial_trust_score,
            verifications_submitted: 0,
            verifications_received: 0,
            reliability_score: params.initial_trust_score,
            join_date: now,
            last_activity: now,
        }
    }

    /// Apply the effects of one successful verification submission.
    ///
    /// Trust rises by a fixed increment, capped at 1.0; it never falls.
    pub fn record_submission(&mut self, now: Timestamp, params: &TrustParams) {
        self.verifications_submitted += 1;
        self.last_activity = now;
        self.trust_score = (self.trust_score + params.trust_increment).min(1.0);
    }

    /// Tiered reputation label. Both conditions of a tier must hold; tiers
    /// are checked from the top down and the first match wins.
    pub fn trust_level(&self) -> TrustLevel {
        let score = self.trust_score;
        let submitted = self.verifications_submitted;
        if score >= 0.9 && submitted >= 50 {
            TrustLevel::Expert
        } else if score >= 0.8 && submitted >= 20 {
            TrustLevel::Veteran
        } else if score >= 0.6 && submitted >= 5 {
            TrustLevel::Trusted
        } else {
            TrustLevel::New
        }
    }

    /// Derived statistics for display.
    pub fn stats(&self) -> VerificationStats {
        VerificationStats {
            trust_level: self.trust_level(),
            trust_score: self.trust_score,
            verifications_submitted: self.verifications_submitted,
            verifications_received: self.verifications_received,
            member_since: self.join_date,
        }
    }
}

/// Point-in-time view of an installation's standing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationStats {
    pub trust_level: TrustLevel,
    pub trust_score: f64,
    pub verifications_submitted: u32,
    pub verifications_received: u32,
    pub member_since: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash() -> IdentityHash {
        IdentityHash::new("abcdef0123456789")
    }

    fn fresh() -> TrustProfile {
        TrustProfile::new(hash(), Timestamp::new(1_000), &TrustParams::default())
    }

    #[test]
    fn new_profile_defaults() {
        let p = fresh();
        assert_eq!(p.schema_version, CURRENT_PROFILE_SCHEMA);
        assert_eq!(p.trust_score, 0.5);
        assert_eq!(p.verifications_submitted, 0);
        assert_eq!(p.verifications_received, 0);
        assert_eq!(p.join_date, Timestamp::new(1_000));
    }

    #[test]
    fn submission_increments_trust_and_counters() {
        let params = TrustParams::default();
        let mut p = fresh();
        for n in 1..=10u32 {
            p.record_submission(Timestamp::new(1_000 + u64::from(n)), &params);
            assert_eq!(p.verifications_submitted, n);
            let expected = 0.5 + 0.01 * f64::from(n);
            assert!((p.trust_score - expected).abs() < 1e-9);
        }
        assert_eq!(p.last_activity, Timestamp::new(1_010));
    }

    #[test]
    fn trust_score_caps_at_one() {
        let params = TrustParams::default();
        let mut p = fresh();
        for _ in 0..200 {
            p.record_submission(Timestamp::new(2_000), &params);
        }
        assert_eq!(p.trust_score, 1.0);
        assert_eq!(p.verifications_submitted, 200);
    }

    #[test]
    fn trust_level_requires_both_conditions() {
        let mut p = fresh();

        // High score, few submissions: still new.
        p.trust_score = 0.95;
        p.verifications_submitted = 3;
        assert_eq!(p.trust_level(), TrustLevel::New);

        // Many submissions, low score: still new.
        p.trust_score = 0.55;
        p.verifications_submitted = 100;
        assert_eq!(p.trust_level(), TrustLevel::New);
    }

    #[test]
    fn trust_level_tiers() {
        let mut p = fresh();

        p.trust_score = 0.6;
        p.verifications_submitted = 5;
        assert_eq!(p.trust_level(), TrustLevel::Trusted);

        p.trust_score = 0.8;
        p.verifications_submitted = 20;
        assert_eq!(p.trust_level(), TrustLevel::Veteran);

        p.trust_score = 0.9;
        p.verifications_submitted = 50;
        assert_eq!(p.trust_level(), TrustLevel::Expert);
    }

    #[test]
    fn stats_mirror_profile() {
        let mut p = fresh();
        p.trust_score = 0.62;
        p.verifications_submitted = 7;
        let stats = p.stats();
        assert_eq!(stats.trust_level, TrustLevel::Trusted);
        assert_eq!(stats.verifications_submitted, 7);
        assert_eq!(stats.member_since, p.join_date);
    }
}
