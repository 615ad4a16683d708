//! Translate interface - the provider itself lives behind HTTP

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire request for a LibreTranslate-compatible `/translate` endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub q: String,
    pub source: String,
    pub target: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum TranslateError {
    /// Provider answered with a non-success status (bad language code, empty text, ...)
    #[error("translator rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("translator unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected translator response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` from `source` (or `"auto"`) into `target`
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError>;

    /// Best-effort reachability probe
    async fn health_check(&self) -> bool;
}
