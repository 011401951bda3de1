use thiserror::Error;
use vigil_store::StoreError;

#[derive(Debug, Error)]
pub enum TrustError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("trust profile serialization error: {0}")]
    Serialization(String),

    #[error("unsupported trust profile schema version {found} (current: {current})")]
    UnsupportedSchema { found: u32, current: u32 },
}

impl From<serde_json::Error> for TrustError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
