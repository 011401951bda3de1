//! Device id lifecycle: generate once, persist, cache, fall back.

use crate::hash::{derive_hash, short_digest};
use rand::Rng;
use std::sync::{Arc, Mutex};
use tracing::warn;
use vigil_store::KeyValueStore;
use vigil_types::{Clock, IdentityHash};

/// Storage key for the persisted device id.
pub const DEVICE_ID_KEY: &str = "vigil.device_id";

/// Prefix marking an ephemeral id minted while persistence was unavailable.
/// Such ids live only as long as the process and never match across restarts.
pub const SESSION_ID_PREFIX: &str = "session-";

/// Returns whether an id is a session-only fallback rather than a persisted one.
pub fn is_session_id(id: &str) -> bool {
    id.starts_with(SESSION_ID_PREFIX)
}

/// Owns the installation's device id.
///
/// `get_or_create_device_id` is idempotent: within a process via the
/// in-memory cache, across restarts via the persisted value. If the store is
/// unavailable the provider fails open with a session-only id so the rest of
/// the engine keeps working for the current run.
pub struct IdentityProvider<S> {
    store: Arc<S>,
    cached: Mutex<Option<String>>,
}

impl<S: KeyValueStore> IdentityProvider<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            cached: Mutex::new(None),
        }
    }

    /// Return the installation's device id, generating and persisting it on
    /// first use.
    pub fn get_or_create_device_id(&self, clock: &dyn Clock) -> String {
        let mut cached = self.cached.lock().unwrap();
        if let Some(id) = cached.as_ref() {
            return id.clone();
        }

        let id = match self.load_or_generate(clock) {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "device id persistence unavailable, using session-only id");
                format!("{SESSION_ID_PREFIX}{}", Self::generate_token(clock))
            }
        };
        *cached = Some(id.clone());
        id
    }

    /// The public identity token for this installation.
    pub fn verifier_hash(&self, clock: &dyn Clock) -> IdentityHash {
        derive_hash(&self.get_or_create_device_id(clock))
    }

    /// Drop the in-memory cache. The next call re-reads (or re-creates) the
    /// persisted id. Used after a clear-all-data wipe.
    pub fn reset_cache(&self) {
        *self.cached.lock().unwrap() = None;
    }

    fn load_or_generate(&self, clock: &dyn Clock) -> Result<String, vigil_store::StoreError> {
        if let Some(existing) = self.store.get(DEVICE_ID_KEY)? {
            if !existing.is_empty() {
                return Ok(existing);
            }
        }
        let id = Self::generate_token(clock);
        self.store.set(DEVICE_ID_KEY, &id)?;
        Ok(id)
    }

    /// Mint a fresh opaque token from the current time plus random entropy,
    /// pushed through the one-way digest so neither component is recoverable.
    fn generate_token(clock: &dyn Clock) -> String {
        let now = clock.now().as_millis();
        let entropy: u128 = rand::thread_rng().gen();
        short_digest(&[&now.to_be_bytes(), &entropy.to_be_bytes()])
    }
}
