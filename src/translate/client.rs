use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::interface::{
    TranslateError, TranslateErrorBody, TranslateRequest, TranslateResponse, TranslatorInterface,
};

/// Translator client for a LibreTranslate-compatible HTTP service
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpTranslator {
    pub fn new(base_url: String, api_key: Option<String>, timeout: Duration) -> Result<Self, TranslateError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl TranslatorInterface for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, TranslateError> {
        let url = format!("{}/translate", self.base_url);
        let request = TranslateRequest {
            q: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            format: "text".to_string(),
            api_key: self.api_key.clone(),
        };

        debug!("Sending translate request: source={}, target={}, chars={}",
               source, target, text.chars().count());

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Provider error bodies are `{"error": "..."}`; fall back to the raw text
            let message = serde_json::from_str::<TranslateErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            error!("Translation failed ({}): {}", status, message);
            return Err(TranslateError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let result: TranslateResponse = serde_json::from_str(&body)
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;
        Ok(result.translated_text)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/languages", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Translator health check failed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn translator(server: &MockServer, api_key: Option<&str>) -> HttpTranslator {
        HttpTranslator::new(server.uri(), api_key.map(String::from), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_translate_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .and(body_json(json!({
                "q": "Hello",
                "source": "auto",
                "target": "fr",
                "format": "text",
                "api_key": "k1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "translatedText": "Bonjour" })))
            .expect(1)
            .mount(&server)
            .await;

        let out = translator(&server, Some("k1")).translate("Hello", "auto", "fr").await.unwrap();
        assert_eq!(out, "Bonjour");
    }

    #[tokio::test]
    async fn test_unsupported_language_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/translate"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "zz is not supported" })))
            .mount(&server)
            .await;

        let err = translator(&server, None).translate("Hello", "auto", "zz").await.unwrap_err();
        match err {
            TranslateError::Rejected { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "zz is not supported");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body_kept_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = translator(&server, None).translate("Hello", "auto", "fr").await.unwrap_err();
        assert!(matches!(err, TranslateError::Rejected { status: 503, ref message } if message == "upstream down"));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "text": "oops" })))
            .mount(&server)
            .await;

        let err = translator(&server, None).translate("Hello", "auto", "fr").await.unwrap_err();
        assert!(matches!(err, TranslateError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        assert!(translator(&server, None).health_check().await);

        let unreachable = HttpTranslator::new("http://127.0.0.1:1".to_string(), None, Duration::from_secs(1)).unwrap();
        assert!(!unreachable.health_check().await);
    }
}
