//! Persisted ledger operations and queries.

use crate::error::LedgerError;
use crate::record::{Verification, CURRENT_LEDGER_SCHEMA};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use vigil_store::KeyValueStore;
use vigil_types::{IdentityHash, ReportId, Timestamp};

/// Storage key for the serialized ledger document.
pub const LEDGER_KEY: &str = "vigil.verifications";

/// The persisted document shape: version + records.
#[derive(Serialize, Deserialize)]
struct LedgerDocument {
    schema_version: u32,
    records: Vec<Verification>,
}

/// Append-only verification collection with lazy retention trimming.
///
/// Reads filter out records past the retention window; writes additionally
/// persist the trimmed collection, so expired records disappear from disk on
/// the next append.
pub struct VerificationLedger<S> {
    store: Arc<S>,
    retention_ms: u64,
}

impl<S: KeyValueStore> VerificationLedger<S> {
    pub fn new(store: Arc<S>, retention_ms: u64) -> Self {
        Self {
            store,
            retention_ms,
        }
    }

    /// All live (non-expired) records.
    pub fn load(&self, now: Timestamp) -> Result<Vec<Verification>, LedgerError> {
        let mut records = self.load_raw()?;
        records.retain(|r| !r.is_expired(self.retention_ms, now));
        Ok(records)
    }

    /// Append a record, trimming expired history in the same write.
    pub fn append(&self, record: Verification, now: Timestamp) -> Result<(), LedgerError> {
        let mut records = self.load_raw()?;
        let before = records.len();
        records.retain(|r| !r.is_expired(self.retention_ms, now));
        let trimmed = before - records.len();
        records.push(record);
        self.persist(&records)?;
        if trimmed > 0 {
            debug!(trimmed, "dropped expired verification records");
        }
        Ok(())
    }

    /// Live records for one report.
    pub fn by_report(
        &self,
        report_id: &ReportId,
        now: Timestamp,
    ) -> Result<Vec<Verification>, LedgerError> {
        let mut records = self.load(now)?;
        records.retain(|r| &r.report_id == report_id);
        Ok(records)
    }

    /// Live records submitted by one verifier.
    pub fn by_verifier(
        &self,
        verifier: &IdentityHash,
        now: Timestamp,
    ) -> Result<Vec<Verification>, LedgerError> {
        let mut records = self.load(now)?;
        records.retain(|r| &r.verifier_hash == verifier);
        Ok(records)
    }

    fn load_raw(&self) -> Result<Vec<Verification>, LedgerError> {
        match self.store.get(LEDGER_KEY)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                let doc: LedgerDocument = serde_json::from_str(&raw)?;
                if doc.schema_version != CURRENT_LEDGER_SCHEMA {
                    return Err(LedgerError::UnsupportedSchema {
                        found: doc.schema_version,
                        current: CURRENT_LEDGER_SCHEMA,
                    });
                }
                Ok(doc.records)
            }
        }
    }

    fn persist(&self, records: &[Verification]) -> Result<(), LedgerError> {
        let doc = LedgerDocument {
            schema_version: CURRENT_LEDGER_SCHEMA,
            records: records.to_vec(),
        };
        let raw = serde_json::to_string(&doc)?;
        self.store.set(LEDGER_KEY, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::VerificationMetadata;
    use vigil_nullables::NullStore;
    use vigil_types::{VerificationId, VerificationStrength};

    const DAY_MS: u64 = 24 * 3_600 * 1_000;
    const RETENTION_MS: u64 = 30 * DAY_MS;

    fn record(report: &str, verifier: &str, time: u64) -> Verification {
        let report_id = ReportId::new(report);
        Verification {
            id: Verification::derive_id(verifier, &report_id, Timestamp::new(time)),
            report_id,
            verifier_hash: IdentityHash::new(verifier),
            verification_time: Timestamp::new(time),
            proximity_score: 0.9,
            trust_score: 0.5,
            strength: VerificationStrength::Medium,
            metadata: VerificationMetadata {
                user_distance_km: 1.0,
                time_to_verify_ms: 60_000,
                device_hash: IdentityHash::new(verifier),
            },
        }
    }

    fn ledger() -> (Arc<NullStore>, VerificationLedger<NullStore>) {
        let store = Arc::new(NullStore::new());
        let ledger = VerificationLedger::new(store.clone(), RETENTION_MS);
        (store, ledger)
    }

    #[test]
    fn empty_ledger_loads_empty() {
        let (_store, ledger) = ledger();
        assert!(ledger.load(Timestamp::new(0)).unwrap().is_empty());
    }

    #[test]
    fn append_then_query() {
        let (_store, ledger) = ledger();
        let now = Timestamp::new(1_000);
        ledger.append(record("r1", "verifier-a", 1_000), now).unwrap();
        ledger.append(record("r2", "verifier-a", 2_000), now).unwrap();
        ledger.append(record("r1", "verifier-b", 3_000), now).unwrap();

        let now = Timestamp::new(5_000);
        assert_eq!(ledger.by_report(&ReportId::new("r1"), now).unwrap().len(), 2);
        assert_eq!(
            ledger
                .by_verifier(&IdentityHash::new("verifier-a"), now)
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn expired_records_hidden_from_reads() {
        let (_store, ledger) = ledger();
        let old = 1_000;
        ledger
            .append(record("r1", "v", old), Timestamp::new(old))
            .unwrap();

        let later = Timestamp::new(old + 31 * DAY_MS);
        assert!(ledger.load(later).unwrap().is_empty());
    }

    #[test]
    fn write_trims_expired_records_from_disk() {
        let (store, ledger) = ledger();
        ledger
            .append(record("r1", "v", 1_000), Timestamp::new(1_000))
            .unwrap();

        // 31 days later a new append rewrites the document without the old record.
        let later = Timestamp::new(1_000 + 31 * DAY_MS);
        ledger
            .append(record("r2", "v", later.as_millis()), later)
            .unwrap();

        let raw = store.get(LEDGER_KEY).unwrap().unwrap();
        assert!(!raw.contains("\"r1\""));
        assert!(raw.contains("\"r2\""));
    }

    #[test]
    fn record_on_retention_boundary_survives() {
        let (_store, ledger) = ledger();
        ledger
            .append(record("r1", "v", 1_000), Timestamp::new(1_000))
            .unwrap();
        // One millisecond before the boundary.
        let just_before = Timestamp::new(1_000 + RETENTION_MS - 1);
        assert_eq!(ledger.load(just_before).unwrap().len(), 1);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let (store, ledger) = ledger();
        store
            .set(LEDGER_KEY, "{\"schema_version\":9,\"records\":[]}")
            .unwrap();
        assert!(matches!(
            ledger.load(Timestamp::new(0)),
            Err(LedgerError::UnsupportedSchema { found: 9, .. })
        ));
    }
}
