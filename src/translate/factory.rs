use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tracing::info;
use crate::config::TranslateConfig;
use super::{HttpTranslator, TranslatorInterface};

/// Factory for creating translator clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translator based on configuration
    pub fn create_translator(config: &TranslateConfig) -> Result<Arc<dyn TranslatorInterface>> {
        info!("Initializing translator: {}", config.base_url);

        let client = HttpTranslator::new(
            config.base_url.clone(),
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Arc::new(client))
    }
}
