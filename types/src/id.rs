//! Identifier newtypes.
//!
//! `IdentityHash` is the only identity token that ever appears in persisted
//! records or query results. The raw device id never leaves the identity
//! provider — the hash is a one-way, deterministic pseudonym for it, not a
//! cryptographic unlinkability guarantee (anyone holding the device id can
//! recompute the hash).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to an externally-owned community report.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(String);

impl ReportId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Public-facing pseudonym for an installation: a 16-character lowercase-hex
/// truncation of a Blake2b digest of the device id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityHash(String);

impl IdentityHash {
    /// Length of the hex token.
    pub const LEN: usize = 16;

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique id of a single verification record, derived from the submitting
/// identity, the report id, and the submission time.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerificationId(String);

impl VerificationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
