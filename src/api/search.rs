use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::{error, internal_error, ApiError};
use crate::models::{
    IndexDocumentsRequest, IndexDocumentsResponse, SearchRequest, SearchResponse,
};
use crate::state::AppState;
use crate::vector::indexer;

/// POST /api/ai/index-documents — chunk, embed, and upsert documents.
///
/// A write has no rule-based fallback: missing provider credentials are a
/// 503, a failed provider call a 500.
pub async fn index_documents(
    State(state): State<AppState>,
    Json(req): Json<IndexDocumentsRequest>,
) -> Result<Json<IndexDocumentsResponse>, ApiError> {
    if req.documents.is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "At least one document is required",
        ));
    }
    if !state.config.vector.is_available() {
        return Err(error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Vector search provider not configured",
        ));
    }
    if !state.config.llm.is_available() {
        return Err(error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Embedding provider not configured",
        ));
    }

    let indexed_count = indexer::index_documents(
        &state.http_client,
        &state.config.llm,
        &state.config.vector,
        &req.documents,
        req.namespace.as_deref(),
    )
    .await
    .map_err(internal_error)?;

    Ok(Json(IndexDocumentsResponse {
        status: "success".to_string(),
        indexed_count,
    }))
}

/// POST /api/ai/search — semantic search over indexed documents.
///
/// Degrades to an empty result list when the providers are unconfigured or
/// the call fails; search never surfaces a provider error to the caller.
pub async fn semantic_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(error(StatusCode::BAD_REQUEST, "Query is required"));
    }

    if !state.config.vector.is_available() || !state.config.llm.is_available() {
        return Ok(Json(SearchResponse {
            results: Vec::new(),
            total_count: 0,
        }));
    }

    let results = match indexer::semantic_search(
        &state.http_client,
        &state.config.llm,
        &state.config.vector,
        query,
        req.limit,
        req.namespace.as_deref(),
    )
    .await
    {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!("Semantic search failed, returning empty results: {e}");
            Vec::new()
        }
    };

    let total_count = results.len();
    Ok(Json(SearchResponse {
        results,
        total_count,
    }))
}
