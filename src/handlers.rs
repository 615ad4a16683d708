use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::errors::HandlerError;
use crate::storage::{RecordStoreInterface, StorageError};
use crate::translate::TranslatorInterface;
use crate::types::{RecordKey, TranslationRequest, TranslationResponse, TranslationResult};

/// Collection names the two records go to
#[derive(Debug, Clone)]
pub struct Collections {
    pub input: String,
    pub output: String,
}

/// Translates one payload and records the request and result.
///
/// Each call is independent: nothing is kept between calls, and the two
/// record writes are not atomic. If the output write fails the input record
/// stays behind without a counterpart.
pub struct RequestHandler {
    translator: Arc<dyn TranslatorInterface>,
    store: Arc<dyn RecordStoreInterface>,
    collections: Collections,
    source_language: String,
}

impl RequestHandler {
    pub fn new(
        translator: Arc<dyn TranslatorInterface>,
        store: Arc<dyn RecordStoreInterface>,
        collections: Collections,
        source_language: String,
    ) -> Self {
        Self {
            translator,
            store,
            collections,
            source_language,
        }
    }

    pub fn translator(&self) -> &Arc<dyn TranslatorInterface> {
        &self.translator
    }

    pub async fn handle(&self, payload: &[u8]) -> Result<TranslationResponse, HandlerError> {
        let request: TranslationRequest = serde_json::from_slice(payload)
            .map_err(|e| HandlerError::MalformedRequest(e.to_string()))?;

        debug!("Translating {} chars into {}", request.text.chars().count(), request.target_language);
        let translated_text = self
            .translator
            .translate(&request.text, &self.source_language, &request.target_language)
            .await?;

        let key = RecordKey::generate();
        info!("Recording translation {}", key);

        let input_record = serde_json::to_value(&request).map_err(StorageError::from)?;
        self.store
            .put(&self.collections.input, &key.input_key(), &input_record)
            .await?;

        let result = TranslationResult {
            original_text: request.text,
            translated_text,
            target_language: request.target_language,
        };

        let output_record = serde_json::to_value(&result).map_err(StorageError::from)?;
        if let Err(e) = self
            .store
            .put(&self.collections.output, &key.output_key(), &output_record)
            .await
        {
            warn!("Input record {} left without output: {}", key, e);
            return Err(e.into());
        }

        Ok(TranslationResponse {
            translated_text: result.translated_text,
        })
    }
}
