use thiserror::Error;
use vigil_store::StoreError;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("ledger serialization error: {0}")]
    Serialization(String),

    #[error("unsupported ledger schema version {found} (current: {current})")]
    UnsupportedSchema { found: u32, current: u32 },
}

impl From<serde_json::Error> for LedgerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
