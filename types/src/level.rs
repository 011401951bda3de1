//! Strength and level classifications.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative weight of a single verification, classified at submission
/// time from the combined trust + proximity score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStrength {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for VerificationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        write!(f, "{s}")
    }
}

/// Aggregate confidence in a report, derived from all of its live
/// verifications. `Verified` additionally requires a minimum verifier count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportConfidence {
    Unverified,
    Weak,
    Medium,
    Strong,
    Verified,
}

impl fmt::Display for ReportConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unverified => "unverified",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::Verified => "verified",
        };
        write!(f, "{s}")
    }
}

/// Tiered reputation label for an identity, derived from trust score and
/// submission volume. Both thresholds of a tier must hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    New,
    Trusted,
    Veteran,
    Expert,
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::New => "new",
            Self::Trusted => "trusted",
            Self::Veteran => "veteran",
            Self::Expert => "expert",
        };
        write!(f, "{s}")
    }
}
