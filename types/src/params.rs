//! Engine parameters.
//!
//! All thresholds and weights the trust engine applies, gathered in one
//! struct so tests and the host application can tune them without touching
//! engine code.

use serde::{Deserialize, Serialize};

/// Parameters governing eligibility, scoring, and retention.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrustParams {
    // ── Eligibility ──────────────────────────────────────────────────────
    /// Maximum distance (km) from the report at which verification is allowed.
    /// Also the zero point of the linear proximity falloff.
    pub max_verification_distance_km: f64,

    /// Maximum verifications one identity may submit per local calendar day.
    pub max_verifications_per_day: u32,

    /// Minimum minutes between two verifications by the same identity.
    pub verification_cooldown_mins: u64,

    // ── Scoring ──────────────────────────────────────────────────────────
    /// Weight of the verifier's trust score in the combined score.
    pub trust_weight: f64,

    /// Weight of the proximity score in the combined score.
    pub proximity_weight: f64,

    /// Combined score at or above which a verification is `strong` and a
    /// report qualifies for `strong`/`verified`.
    pub strong_threshold: f64,

    /// Combined score at or above which a verification is `medium`.
    pub medium_threshold: f64,

    /// Minimum verification count (with a strong combined score) for a
    /// report to classify as `verified`.
    pub verified_min_count: u32,

    /// Number of top verifier hashes reported in a summary.
    pub top_verifier_count: usize,

    // ── Trust profile ────────────────────────────────────────────────────
    /// Trust score assigned to a freshly created profile.
    pub initial_trust_score: f64,

    /// Trust score increment per successful verification (capped at 1.0).
    pub trust_increment: f64,

    /// Inactivity window (days) after which trust decay would apply.
    /// No code path applies decay; the policy is documented but inactive.
    pub trust_decay_window_days: u64,

    // ── Retention ────────────────────────────────────────────────────────
    /// Days a verification record is retained before the lazy trim drops it.
    pub retention_days: u64,
}

impl TrustParams {
    pub const MS_PER_MINUTE: u64 = 60 * 1_000;
    pub const MS_PER_DAY: u64 = 24 * 3_600 * 1_000;

    /// Cooldown between verifications, in milliseconds.
    pub fn cooldown_ms(&self) -> u64 {
        self.verification_cooldown_mins * Self::MS_PER_MINUTE
    }

    /// Ledger retention window, in milliseconds.
    pub fn retention_ms(&self) -> u64 {
        self.retention_days * Self::MS_PER_DAY
    }
}

impl Default for TrustParams {
    fn default() -> Self {
        Self {
            max_verification_distance_km: 10.0,
            max_verifications_per_day: 20,
            verification_cooldown_mins: 2,
            trust_weight: 0.7,
            proximity_weight: 0.3,
            strong_threshold: 0.8,
            medium_threshold: 0.6,
            verified_min_count: 3,
            top_verifier_count: 5,
            initial_trust_score: 0.5,
            trust_increment: 0.01,
            trust_decay_window_days: 30,
            retention_days: 30,
        }
    }
}
