//! Persisted profile access with an in-memory cache.

use crate::error::TrustError;
use crate::profile::{TrustProfile, CURRENT_PROFILE_SCHEMA};
use std::sync::{Arc, Mutex};
use tracing::debug;
use vigil_store::KeyValueStore;
use vigil_types::{IdentityHash, Timestamp, TrustParams};

/// Storage key for the installation's trust profile.
pub const TRUST_PROFILE_KEY: &str = "vigil.trust_profile";

/// Reads and writes the single [`TrustProfile`] this installation owns.
///
/// Creation is lazy: the first read persists a default profile immediately.
/// Updates are whole-record overwrites, written through synchronously and
/// mirrored into the cache before returning.
pub struct TrustProfileStore<S> {
    store: Arc<S>,
    cache: Mutex<Option<TrustProfile>>,
}

impl<S: KeyValueStore> TrustProfileStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            cache: Mutex::new(None),
        }
    }

    /// The current profile, created with defaults on first access.
    pub fn get_or_create(
        &self,
        device_hash: &IdentityHash,
        now: Timestamp,
        params: &TrustParams,
    ) -> Result<TrustProfile, TrustError> {
        let mut cache = self.cache.lock().unwrap();
        if let Some(profile) = cache.as_ref() {
            return Ok(profile.clone());
        }

        let profile = match self.store.get(TRUST_PROFILE_KEY)? {
            Some(raw) => Self::decode(&raw)?,
            None => {
                let fresh = TrustProfile::new(device_hash.clone(), now, params);
                self.persist(&fresh)?;
                debug!(device_hash = %device_hash, "created trust profile");
                fresh
            }
        };
        *cache = Some(profile.clone());
        Ok(profile)
    }

    /// Overwrite the persisted profile. The write completes before the cache
    /// is refreshed and the call returns.
    pub fn update(&self, profile: &TrustProfile) -> Result<(), TrustError> {
        self.persist(profile)?;
        *self.cache.lock().unwrap() = Some(profile.clone());
        Ok(())
    }

    /// Drop the in-memory cache. Used after a clear-all-data wipe.
    pub fn reset_cache(&self) {
        *self.cache.lock().unwrap() = None;
    }

    fn persist(&self, profile: &TrustProfile) -> Result<(), TrustError> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(TRUST_PROFILE_KEY, &raw)?;
        Ok(())
    }

    fn decode(raw: &str) -> Result<TrustProfile, TrustError> {
        let profile: TrustProfile = serde_json::from_str(raw)?;
        if profile.schema_version != CURRENT_PROFILE_SCHEMA {
            return Err(TrustError::UnsupportedSchema {
                found: profile.schema_version,
                current: CURRENT_PROFILE_SCHEMA,
            });
        }
        Ok(profile)
    }
}
