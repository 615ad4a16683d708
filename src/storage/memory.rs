use async_trait::async_trait;
use dashmap::DashMap;

use super::interface::{RecordStoreInterface, StorageError};

/// In-process record store, records are lost on restart
#[derive(Default)]
pub struct MemoryRecordStore {
    records: DashMap<(String, String), serde_json::Value>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self, collection: &str, key: &str) -> Option<serde_json::Value> {
        self.records
            .get(&(collection.to_string(), key.to_string()))
            .map(|e| e.value().clone())
    }

    /// Keys stored in `collection`, sorted
    #[cfg(test)]
    pub fn keys(&self, collection: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .records
            .iter()
            .filter(|e| e.key().0 == collection)
            .map(|e| e.key().1.clone())
            .collect();
        keys.sort();
        keys
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStoreInterface for MemoryRecordStore {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StorageError> {
        self.records
            .insert((collection.to_string(), key.to_string()), payload.clone());
        Ok(())
    }
}
