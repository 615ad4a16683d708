use async_trait::async_trait;
use std::path::{Path, PathBuf};
use regex::Regex;
use tracing::debug;

use super::interface::{RecordStoreInterface, StorageError};

/// Stores each record as `{root}/{collection}/{key}`
pub struct FileRecordStore {
    root: PathBuf,
}

fn is_safe_filename(filename: &str) -> bool {
    if filename.is_empty() || filename.len() > 255 || filename == "." || filename == ".." {
        return false;
    }

    let pattern = Regex::new(r"^[\w\-.]+$").expect("static regex");
    pattern.is_match(filename)
}

fn sanitize_path_component(component: &str) -> Result<String, StorageError> {
    let sanitized = Path::new(component)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| *n == component)
        .ok_or_else(|| StorageError::InvalidKey(component.to_string()))?;

    if !is_safe_filename(sanitized) {
        return Err(StorageError::InvalidKey(component.to_string()));
    }

    Ok(sanitized.to_string())
}

impl FileRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self, collection: &str, key: &str) -> Result<PathBuf, StorageError> {
        let collection = sanitize_path_component(collection)?;
        let key = sanitize_path_component(key)?;
        Ok(self.root.join(collection).join(key))
    }
}

#[async_trait]
impl RecordStoreInterface for FileRecordStore {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StorageError> {
        let path = self.record_path(collection, key)?;
        let body = serde_json::to_vec_pretty(payload)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, body).await?;
        debug!("Wrote record: {:?}", path);
        Ok(())
    }
}
