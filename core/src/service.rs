//! The trust service.

use crate::outcome::VerifyOutcome;
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};
use vigil_geo::distance_km;
use vigil_identity::IdentityProvider;
use vigil_ledger::{Verification, VerificationLedger, VerificationMetadata};
use vigil_store::{KeyValueStore, KEY_PREFIX};
use vigil_trust::{TrustProfile, TrustProfileStore, VerificationStats};
use vigil_types::{Clock, Coordinates, ReportId, Timestamp, TrustParams};
use vigil_verification::{EligibilityDecision, EligibilityEngine, ScoringEngine, VerificationSummary};

/// User-facing message for any internal submission failure. The cause is
/// logged; only this generic text crosses the boundary.
const SUBMIT_ERROR: &str = "Failed to submit verification";

/// One instance per process, owned by the host application.
///
/// All state lives behind the injected [`KeyValueStore`]; the service itself
/// holds only caches and engines. The `gate` mutex serializes the whole
/// eligibility-check → ledger-append → profile-update sequence inside
/// [`verify_report`](Self::verify_report), closing the check-then-act race
/// that concurrent submissions from the same installation could otherwise
/// exploit against the duplicate and daily-cap gates.
pub struct TrustService<S> {
    params: TrustParams,
    clock: Arc<dyn Clock>,
    store: Arc<S>,
    identity: IdentityProvider<S>,
    profiles: TrustProfileStore<S>,
    ledger: VerificationLedger<S>,
    eligibility: EligibilityEngine,
    scoring: ScoringEngine,
    gate: Mutex<()>,
}

impl<S: KeyValueStore> TrustService<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self::with_params(store, clock, TrustParams::default())
    }

    pub fn with_params(store: Arc<S>, clock: Arc<dyn Clock>, params: TrustParams) -> Self {
        Self {
            identity: IdentityProvider::new(store.clone()),
            profiles: TrustProfileStore::new(store.clone()),
            ledger: VerificationLedger::new(store.clone(), params.retention_ms()),
            eligibility: EligibilityEngine::new(params.clone()),
            scoring: ScoringEngine::new(params.clone()),
            clock,
            store,
            params,
            gate: Mutex::new(()),
        }
    }

    /// Warm the identity and trust profile so later calls hit the caches.
    /// Safe to call more than once.
    pub fn initialize(&self) {
        let now = self.clock.now();
        let hash = self.identity.verifier_hash(self.clock.as_ref());
        if let Err(e) = self.profiles.get_or_create(&hash, now, &self.params) {
            warn!(error = %e, "trust profile unavailable during initialization");
        }
        info!(verifier_hash = %hash, "trust service initialized");
    }

    /// Run the eligibility gates without mutating anything.
    ///
    /// If the ledger cannot be read the check runs against an empty history:
    /// availability wins over strictness at this boundary, matching the
    /// submission path which will fail properly on write.
    pub fn can_verify_report(
        &self,
        report_id: &ReportId,
        report_location: Coordinates,
        user_location: Coordinates,
    ) -> EligibilityDecision {
        let now = self.clock.now();
        let history = self.verifier_history(now);
        self.eligibility
            .check(report_id, report_location, user_location, &history, now)
    }

    /// Submit a verification.
    ///
    /// Re-runs the full eligibility check, then appends the record and
    /// updates the trust profile. The two writes are not atomic; a profile
    /// write failure after a successful append surfaces as `Failed` and is
    /// logged with the cause.
    pub fn verify_report(
        &self,
        report_id: &ReportId,
        report_location: Coordinates,
        report_timestamp: Timestamp,
        user_location: Coordinates,
    ) -> VerifyOutcome {
        let _guard = self.gate.lock().unwrap();
        let now = self.clock.now();

        let history = self.verifier_history(now);
        let decision =
            self.eligibility
                .check(report_id, report_location, user_location, &history, now);
        if let Some(reason) = decision.reason {
            return VerifyOutcome::Denied(reason);
        }

        let device_id = self.identity.get_or_create_device_id(self.clock.as_ref());
        let verifier_hash = vigil_identity::derive_hash(&device_id);

        let profile = match self.profiles.get_or_create(&verifier_hash, now, &self.params) {
            Ok(p) => p,
            Err(e) => {
                error!(error = %e, "could not load trust profile for submission");
                return VerifyOutcome::Failed(SUBMIT_ERROR.to_string());
            }
        };

        let user_distance_km = distance_km(user_location, report_location);
        let proximity_score = self.scoring.proximity_score(user_distance_km);
        let combined = self
            .scoring
            .combined_score(profile.trust_score, proximity_score);
        let strength = self.scoring.classify_strength(combined);

        let record = Verification {
            id: Verification::derive_id(&device_id, report_id, now),
            report_id: report_id.clone(),
            verifier_hash: verifier_hash.clone(),
            verification_time: now,
            proximity_score,
            trust_score: profile.trust_score,
            strength,
            metadata: VerificationMetadata {
                user_distance_km,
                time_to_verify_ms: report_timestamp.elapsed_since(now),
                device_hash: verifier_hash.clone(),
            },
        };

        if let Err(e) = self.ledger.append(record.clone(), now) {
            error!(error = %e, report_id = %report_id, "ledger append failed");
            return VerifyOutcome::Failed(SUBMIT_ERROR.to_string());
        }

        let mut updated = profile;
        updated.record_submission(now, &self.params);
        if let Err(e) = self.profiles.update(&updated) {
            error!(error = %e, "trust profile update failed after ledger append");
            return VerifyOutcome::Failed(SUBMIT_ERROR.to_string());
        }

        info!(
            report_id = %report_id,
            verifier_hash = %verifier_hash,
            strength = %record.strength,
            "verification recorded"
        );
        VerifyOutcome::Recorded(record)
    }

    /// Aggregate all live verifications for a report.
    ///
    /// A ledger read failure yields the `unverified` summary rather than an
    /// error.
    pub fn get_verification_summary(&self, report_id: &ReportId) -> VerificationSummary {
        let now = self.clock.now();
        match self.ledger.by_report(report_id, now) {
            Ok(records) => self.scoring.summarize(report_id.clone(), &records),
            Err(e) => {
                warn!(error = %e, report_id = %report_id, "ledger unavailable for summary");
                VerificationSummary::unverified(report_id.clone())
            }
        }
    }

    /// The caller's trust profile, created with defaults on first access.
    ///
    /// If persistence is unavailable an unsaved default profile is returned
    /// so the UI still has something to show.
    pub fn get_user_trust_profile(&self) -> TrustProfile {
        let now = self.clock.now();
        let hash = self.identity.verifier_hash(self.clock.as_ref());
        match self.profiles.get_or_create(&hash, now, &self.params) {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, "trust profile unavailable, returning defaults");
                TrustProfile::new(hash, now, &self.params)
            }
        }
    }

    /// Derived statistics for the caller's profile.
    pub fn get_verification_stats(&self) -> VerificationStats {
        self.get_user_trust_profile().stats()
    }

    /// Remove every engine-owned key from the store and drop all caches.
    /// After this call the installation looks freshly installed: new device
    /// id on next use, neutral trust profile, empty ledger.
    pub fn clear_all_data(&self) {
        let _guard = self.gate.lock().unwrap();
        match self.store.list_keys() {
            Ok(keys) => {
                let ours: Vec<String> = keys
                    .into_iter()
                    .filter(|k| k.starts_with(KEY_PREFIX))
                    .collect();
                if let Err(e) = self.store.remove_many(&ours) {
                    error!(error = %e, "failed to remove persisted keys");
                } else {
                    info!(removed = ours.len(), "cleared all persisted data");
                }
            }
            Err(e) => error!(error = %e, "failed to list keys for clear"),
        }
        self.identity.reset_cache();
        self.profiles.reset_cache();
    }

    /// The caller's own live verification history, empty when the ledger is
    /// unreadable.
    fn verifier_history(&self, now: Timestamp) -> Vec<Verification> {
        let hash = self.identity.verifier_hash(self.clock.as_ref());
        match self.ledger.by_verifier(&hash, now) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "ledger unavailable for eligibility history");
                Vec::new()
            }
        }
    }
}
