//! The ordered eligibility gates.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vigil_geo::distance_km;
use vigil_ledger::Verification;
use vigil_types::{Coordinates, ReportId, Timestamp, TrustParams};

/// Why a verification attempt was turned down.
///
/// Ineligibility is an expected outcome, never an error: it travels inside
/// an [`EligibilityDecision`], and its `Display` text is what the host shows
/// the user.
#[derive(Clone, Debug, PartialEq, Error, Serialize, Deserialize)]
pub enum DenyReason {
    #[error("report is {distance_km:.1} km away; you must be within {limit_km:.0} km to verify")]
    TooFar { distance_km: f64, limit_km: f64 },

    #[error("you have already verified this report")]
    AlreadyVerified,

    #[error("daily limit of {limit} verifications reached")]
    DailyCapReached { limit: u32 },

    #[error("please wait {minutes_remaining} more minute(s) before verifying again")]
    CooldownActive { minutes_remaining: u64 },
}

/// Outcome of a `can_verify_report` check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EligibilityDecision {
    pub allowed: bool,
    pub reason: Option<DenyReason>,
}

impl EligibilityDecision {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn denied(reason: DenyReason) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }
}

/// Runs the gates in order; the first failing gate short-circuits.
///
/// All checks are read-only over the caller's own verification history
/// (records where `verifier_hash` is the caller's).
pub struct EligibilityEngine {
    params: TrustParams,
}

impl EligibilityEngine {
    pub fn new(params: TrustParams) -> Self {
        Self { params }
    }

    /// Gate order: distance, duplicate, daily cap, cooldown.
    pub fn check(
        &self,
        report_id: &ReportId,
        report_location: Coordinates,
        user_location: Coordinates,
        history: &[Verification],
        now: Timestamp,
    ) -> EligibilityDecision {
        let distance = distance_km(user_location, report_location);
        if distance > self.params.max_verification_distance_km {
            return EligibilityDecision::denied(DenyReason::TooFar {
                distance_km: distance,
                limit_km: self.params.max_verification_distance_km,
            });
        }

        if history.iter().any(|v| &v.report_id == report_id) {
            return EligibilityDecision::denied(DenyReason::AlreadyVerified);
        }

        let today = now.local_date_string();
        let today_count = history
            .iter()
            .filter(|v| v.verification_time.local_date_string() == today)
            .count() as u32;
        if today_count >= self.params.max_verifications_per_day {
            return EligibilityDecision::denied(DenyReason::DailyCapReached {
                limit: self.params.max_verifications_per_day,
            });
        }

        if let Some(latest) = history.iter().map(|v| v.verification_time).max() {
            let elapsed = latest.elapsed_since(now);
            let cooldown = self.params.cooldown_ms();
            if elapsed < cooldown {
                let remaining = cooldown - elapsed;
                let minutes_remaining = remaining.div_ceil(TrustParams::MS_PER_MINUTE);
                return EligibilityDecision::denied(DenyReason::CooldownActive {
                    minutes_remaining,
                });
            }
        }

        EligibilityDecision::allowed()
    }
}
