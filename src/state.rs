use std::sync::Arc;

use crate::config::Config;
use crate::handlers::{Collections, RequestHandler};
use crate::storage::RecordStoreFactory;
use crate::translate::TranslatorFactory;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<RequestHandler>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create_translator(&config.translate_config)?;
        let store = RecordStoreFactory::create_store(&config.storage_config).await?;

        let handler = RequestHandler::new(
            translator,
            store,
            Collections {
                input: config.storage_config.input_collection.clone(),
                output: config.storage_config.output_collection.clone(),
            },
            config.translate_config.source_language.clone(),
        );

        Ok(Self {
            handler: Arc::new(handler),
        })
    }
}
