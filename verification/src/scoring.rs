//! Proximity scoring, strength classification, and report summaries.

use serde::{Deserialize, Serialize};
use vigil_ledger::Verification;
use vigil_types::{
    IdentityHash, ReportConfidence, ReportId, Timestamp, TrustParams, VerificationStrength,
};

/// Aggregate view of all live verifications for one report. Derived on
/// demand, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub report_id: ReportId,
    pub verification_count: u32,
    /// Mean of the member verifications' snapshot trust scores.
    pub trust_weighted_score: f64,
    /// Mean of the member verifications' proximity scores.
    pub proximity_weighted_score: f64,
    pub confidence: ReportConfidence,
    pub last_verification: Option<Timestamp>,
    /// Up to five verifier hashes, ordered by descending snapshot trust.
    pub top_verifiers: Vec<IdentityHash>,
}

impl VerificationSummary {
    /// The summary for a report with no live verifications.
    pub fn unverified(report_id: ReportId) -> Self {
        Self {
            report_id,
            verification_count: 0,
            trust_weighted_score: 0.0,
            proximity_weighted_score: 0.0,
            confidence: ReportConfidence::Unverified,
            last_verification: None,
            top_verifiers: Vec::new(),
        }
    }
}

/// Pure scoring functions parameterized by [`TrustParams`].
pub struct ScoringEngine {
    params: TrustParams,
}

impl ScoringEngine {
    pub fn new(params: TrustParams) -> Self {
        Self { params }
    }

    /// Linear falloff from 1 at the report location to 0 at the eligibility
    /// distance limit and beyond.
    pub fn proximity_score(&self, distance_km: f64) -> f64 {
        (1.0 - distance_km / self.params.max_verification_distance_km).max(0.0)
    }

    /// Weighted combination of trust and proximity.
    pub fn combined_score(&self, trust_score: f64, proximity_score: f64) -> f64 {
        trust_score * self.params.trust_weight + proximity_score * self.params.proximity_weight
    }

    /// Classify a single verification's weight from its combined score.
    pub fn classify_strength(&self, combined: f64) -> VerificationStrength {
        if combined >= self.params.strong_threshold {
            VerificationStrength::Strong
        } else if combined >= self.params.medium_threshold {
            VerificationStrength::Medium
        } else {
            VerificationStrength::Weak
        }
    }

    /// Fold a report's live verifications into its summary.
    pub fn summarize(&self, report_id: ReportId, records: &[Verification]) -> VerificationSummary {
        if records.is_empty() {
            return VerificationSummary::unverified(report_id);
        }

        let count = records.len() as u32;
        let n = records.len() as f64;
        let trust_mean = records.iter().map(|r| r.trust_score).sum::<f64>() / n;
        let proximity_mean = records.iter().map(|r| r.proximity_score).sum::<f64>() / n;
        let combined = self.combined_score(trust_mean, proximity_mean);

        let confidence = if count >= self.params.verified_min_count
            && combined >= self.params.strong_threshold
        {
            ReportConfidence::Verified
        } else if combined >= self.params.strong_threshold {
            ReportConfidence::Strong
        } else if combined >= self.params.medium_threshold {
            ReportConfidence::Medium
        } else {
            ReportConfidence::Weak
        };

        let mut by_trust: Vec<&Verification> = records.iter().collect();
        by_trust.sort_by(|a, b| {
            b.trust_score
                .partial_cmp(&a.trust_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let top_verifiers = by_trust
            .iter()
            .take(self.params.top_verifier_count)
            .map(|r| r.verifier_hash.clone())
            .collect();

        VerificationSummary {
            report_id,
            verification_count: count,
            trust_weighted_score: trust_mean,
            proximity_weighted_score: proximity_mean,
            confidence,
            last_verification: records.iter().map(|r| r.verification_time).max(),
            top_verifiers,
        }
    }
}
