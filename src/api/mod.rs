//! Axum HTTP handlers.

pub mod analyze;
pub mod recommend;
pub mod search;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// JSON error body: `{"detail": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

pub type ApiError = (StatusCode, Json<ErrorDetail>);

pub fn error(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
}

/// Map an internal failure to a generic 500. The context message is safe to
/// expose; credentials and backtraces never reach the body.
pub fn internal_error(err: anyhow::Error) -> ApiError {
    tracing::error!("Request failed: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, format!("{err}"))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stack-advisor",
    }))
}
