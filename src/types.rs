use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Inbound payload, also persisted verbatim as the input record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub target_language: String,
}

/// Persisted as the output record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translated_text: String,
}

/// Correlates a request's input and output records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey(Uuid);

impl RecordKey {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn input_key(&self) -> String {
        format!("{}_input.json", self.0)
    }

    pub fn output_key(&self) -> String {
        format!("{}_output.json", self.0)
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
