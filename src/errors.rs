use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::storage::StorageError;
use crate::translate::TranslateError;

#[derive(Error, Debug)]
pub enum HandlerError {
    /// Payload not decodable or missing `text` / `target_language`
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Nothing has been written when this is returned
    #[error("translation failed: {0}")]
    Translation(#[from] TranslateError),

    /// Earlier writes for the same key are left in place
    #[error("storage failed: {0}")]
    Storage(#[from] StorageError),
}

impl HandlerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HandlerError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::Translation(_) => StatusCode::BAD_GATEWAY,
            HandlerError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> serde_json::Value {
        json!({ "error": self.to_string() })
    }

    /// Client errors at debug, downstream failures at error
    pub fn log(&self) {
        match self {
            HandlerError::MalformedRequest(_) => tracing::debug!("Client error: {}", self),
            HandlerError::Translation(_) | HandlerError::Storage(_) => {
                tracing::error!("Downstream error: {}", self)
            }
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Collects formatted log lines written while the returned guard is alive
    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        pub fn install(&self) -> tracing::subscriber::DefaultGuard {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_status_codes_separate_client_and_downstream_errors() {
        let malformed = HandlerError::MalformedRequest("missing field".into());
        let translation = HandlerError::Translation(TranslateError::Rejected {
            status: 400,
            message: "bad language".into(),
        });
        let storage = HandlerError::Storage(StorageError::InvalidKey("x".into()));

        assert_eq!(malformed.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(translation.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(storage.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_carries_message() {
        let err = HandlerError::MalformedRequest("missing field `target_language`".into());
        assert_eq!(
            err.body(),
            json!({ "error": "malformed request: missing field `target_language`" })
        );
    }

    #[test]
    fn test_downstream_failures_log_at_error() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        HandlerError::Translation(TranslateError::Rejected {
            status: 400,
            message: "zz is not supported".into(),
        })
        .log();
        HandlerError::Storage(StorageError::Io(std::io::Error::other("disk full"))).log();

        let out = logs.contents();
        let error_lines: Vec<&str> = out.lines().filter(|l| l.contains("ERROR")).collect();
        assert_eq!(error_lines.len(), 2, "{out}");
        assert!(error_lines[0].contains("zz is not supported"));
        assert!(error_lines[1].contains("disk full"));
    }

    #[test]
    fn test_client_errors_log_at_debug() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        HandlerError::MalformedRequest("missing field".into()).log();

        let out = logs.contents();
        assert!(out.contains("DEBUG"), "{out}");
        assert!(!out.contains("ERROR"), "{out}");
    }
}
