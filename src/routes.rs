use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::HandlerError;
use crate::state::AppState;
use crate::types::TranslationResponse;

/// Gateway proxy event; only the body is used
#[derive(Debug, Deserialize)]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProxyResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/events", post(handle_event))
        .route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let translator_healthy = state.handler.translator().health_check().await;
    Json(json!({
        "status": "ok",
        "translator": translator_healthy
    }))
}

async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResponse>, HandlerError> {
    let response = state.handler.handle(&body).await?;
    Ok(Json(response))
}

async fn handle_event(State(state): State<AppState>, body: Bytes) -> Json<ProxyResponse> {
    let outcome = match serde_json::from_slice::<ProxyEvent>(&body) {
        Ok(ProxyEvent { body: Some(payload) }) => state.handler.handle(payload.as_bytes()).await,
        Ok(ProxyEvent { body: None }) => Err(HandlerError::MalformedRequest("event has no body".to_string())),
        Err(e) => Err(HandlerError::MalformedRequest(e.to_string())),
    };

    let response = match outcome {
        Ok(response) => ProxyResponse {
            status_code: StatusCode::OK.as_u16(),
            body: json!(response).to_string(),
        },
        Err(err) => {
            err.log();
            ProxyResponse {
                status_code: err.status_code().as_u16(),
                body: err.body().to_string(),
            }
        }
    };

    Json(response)
}
