use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::{error, internal_error, ApiError};
use crate::models::{
    CompatibilityReport, FeatureFlags, RecommendRequest, StackRecommendation, StatusResponse,
};
use crate::recommend::{self, score};
use crate::state::AppState;

/// POST /api/ai/recommend-stack — rule-based recommendation with optional
/// LLM enrichment.
///
/// The rule chains always produce a full answer; when an LLM key is
/// configured one enrichment call is attempted and its overrides applied.
/// Any provider failure falls back to the pure rule-based result — this
/// endpoint returns 200 in degraded mode, never a provider error.
pub async fn recommend_stack(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<StackRecommendation>, ApiError> {
    let kb = &state.knowledge;
    let mut selection = recommend::select_stack(&req);

    if state.config.llm.is_available() {
        match crate::llm::enrich::suggest_overrides(&state.http_client, &state.config.llm, kb, &req)
            .await
        {
            Ok(overrides) if !overrides.is_empty() => {
                tracing::info!("Applying LLM stack overrides: {overrides:?}");
                recommend::apply_overrides(kb, &mut selection, &overrides);
            }
            Ok(_) => {
                tracing::debug!("LLM enrichment returned no usable overrides");
            }
            Err(e) => {
                tracing::warn!("LLM enrichment failed, using rule-based result: {e}");
            }
        }
    }

    let recommendation = recommend::assemble(kb, &selection, &req).map_err(internal_error)?;
    Ok(Json(recommendation))
}

/// GET /api/ai/technologies — static category → names listing.
pub async fn technologies(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut map = serde_json::Map::new();
    for (category, names) in state.knowledge.technology_names() {
        map.insert(
            category.as_str().to_string(),
            serde_json::Value::from(names),
        );
    }
    Json(serde_json::Value::Object(map))
}

/// POST /api/ai/analyze-compatibility — body is a bare array of names.
pub async fn analyze_compatibility(
    State(state): State<AppState>,
    Json(technologies): Json<Vec<String>>,
) -> Result<Json<CompatibilityReport>, ApiError> {
    if technologies.is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "At least one technology name is required",
        ));
    }

    let report =
        score::analyze_compatibility(&state.knowledge, &technologies).map_err(internal_error)?;
    Ok(Json(report))
}

/// GET /api/ai/status — which optional providers are configured.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let llm_available = state.config.llm.is_available();
    let vector_available = state.config.vector.is_available();
    Json(StatusResponse {
        llm_available,
        vector_available,
        features: FeatureFlags {
            basic_recommendations: true,
            ai_enhanced_recommendations: llm_available,
            semantic_search: vector_available,
            knowledge_base: true,
        },
    })
}
