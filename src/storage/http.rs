use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::interface::{RecordStoreInterface, StorageError};

/// Generic HTTP PUT store: `PUT {endpoint}/{collection}/{key}`, optionally with a bearer token
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    client: Client,
    endpoint: String,
    auth_token: Option<String>,
}

impl HttpRecordStore {
    pub fn new(endpoint: String, auth_token: Option<String>, timeout: Duration) -> Result<Self, StorageError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_token,
        })
    }
}

#[async_trait]
impl RecordStoreInterface for HttpRecordStore {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StorageError> {
        if collection.is_empty() || collection.contains('/') || key.is_empty() {
            return Err(StorageError::InvalidKey(format!("{}/{}", collection, key)));
        }

        let url = format!("{}/{}/{}", self.endpoint, collection, key);
        let body = serde_json::to_vec(payload)?;

        let mut request = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Object PUT {} failed: {}", url, status);
            return Err(StorageError::Rejected {
                key: format!("{}/{}", collection, key),
                status: status.as_u16(),
            });
        }

        debug!("Stored object {}/{}", collection, key);
        Ok(())
    }
}
