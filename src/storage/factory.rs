use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;
use crate::config::{StorageBackend, StorageConfig};
use super::{FileRecordStore, HttpRecordStore, MemoryRecordStore, RecordStoreInterface, S3RecordStore};

/// Factory for creating record stores
pub struct RecordStoreFactory;

impl RecordStoreFactory {
    pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn RecordStoreInterface>> {
        info!("Initializing record store: {:?}", config.backend);

        let store: Arc<dyn RecordStoreInterface> = match config.backend {
            StorageBackend::Filesystem => Arc::new(FileRecordStore::new(&config.root_dir)),
            StorageBackend::Http => {
                let endpoint = config
                    .endpoint
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("storage_config.endpoint is required for the http backend"))?;
                Arc::new(HttpRecordStore::new(
                    endpoint,
                    config.auth_token.clone(),
                    Duration::from_secs(config.timeout_secs),
                )?)
            }
            StorageBackend::S3 => Arc::new(S3RecordStore::from_config(config).await),
            StorageBackend::Memory => Arc::new(MemoryRecordStore::new()),
        };

        Ok(store)
    }
}
