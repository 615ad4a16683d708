use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("invalid record path component: {0}")]
    InvalidKey(String),

    #[error("record write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("record store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("object store request failed: {0}")]
    ObjectStore(String),

    #[error("record store rejected {key} ({status})")]
    Rejected { key: String, status: u16 },
}

/// Write-only store of JSON records grouped into named collections
#[async_trait]
pub trait RecordStoreInterface: Send + Sync {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StorageError>;
}
