//! S3 record store: collection is the bucket, key is the object key

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use tracing::{debug, error};

use crate::config::StorageConfig;
use super::interface::{RecordStoreInterface, StorageError};

pub struct S3RecordStore {
    client: S3Client,
}

impl S3RecordStore {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }

    /// Build a client from the default AWS chain, overridden by whatever the config sets.
    /// A custom `endpoint` (MinIO and friends) switches to path-style addressing.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let (Some(id), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                id.clone(),
                secret.clone(),
                None,
                None,
                "translate-relay",
            ));
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }
        let sdk_config = loader.load().await;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();
        Self::new(S3Client::from_conf(s3_config))
    }
}

#[async_trait]
impl RecordStoreInterface for S3RecordStore {
    async fn put(
        &self,
        collection: &str,
        key: &str,
        payload: &serde_json::Value,
    ) -> Result<(), StorageError> {
        let body = serde_json::to_vec(payload)?;

        let result = self
            .client
            .put_object()
            .bucket(collection)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await;

        if let Err(e) = result {
            let status = e.raw_response().map(|r| r.status().as_u16());
            error!("put_object {}/{} failed: {}", collection, key, DisplayErrorContext(&e));
            return Err(match status {
                Some(status) => StorageError::Rejected {
                    key: format!("{}/{}", collection, key),
                    status,
                },
                None => StorageError::ObjectStore(DisplayErrorContext(&e).to_string()),
            });
        }

        debug!("Stored s3://{}/{}", collection, key);
        Ok(())
    }
}
