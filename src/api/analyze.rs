use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::{error, ApiError};
use crate::knowledge::{Category, KnowledgeBase, TechEntry};
use crate::models::{AnalyzeTechnologyRequest, TechnologyAnalysis};
use crate::state::AppState;

/// POST /api/ai/analyze-technology — detailed single-technology analysis.
///
/// Uses the LLM when configured, falling back to a knowledge-base-derived
/// analysis on any provider failure. Unknown technologies without an LLM
/// are a 404.
pub async fn analyze_technology(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTechnologyRequest>,
) -> Result<Json<TechnologyAnalysis>, ApiError> {
    let name = req.technology_name.trim();
    if name.is_empty() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "Technology name is required",
        ));
    }

    if state.config.llm.is_available() {
        let prompt = build_analysis_prompt(&req);
        match crate::llm::chat::chat_completion(&state.http_client, &state.config.llm, &prompt)
            .await
        {
            Ok(content) => {
                if let Some(analysis) = parse_analysis(&content, name) {
                    return Ok(Json(analysis));
                }
                tracing::warn!("Unparseable LLM analysis for {name}, using knowledge base");
            }
            Err(e) => {
                tracing::warn!("LLM analysis failed for {name}: {e}");
            }
        }
    }

    match knowledge_base_analysis(&state.knowledge, name) {
        Some(analysis) => Ok(Json(analysis)),
        None => Err(error(
            StatusCode::NOT_FOUND,
            format!("Unknown technology: {name}"),
        )),
    }
}

fn build_analysis_prompt(req: &AnalyzeTechnologyRequest) -> String {
    let mut prompt = format!(
        "You are a technology expert providing detailed analysis of software technologies.\n\n\
         Technology to analyze: {}\n\
         Context: {}\n",
        req.technology_name,
        req.context.as_deref().unwrap_or("General analysis"),
    );
    if let Some(others) = &req.comparison_with {
        if !others.is_empty() {
            prompt.push_str(&format!("Compare with: {}\n", others.join(", ")));
        }
    }
    prompt.push_str(
        "\nRespond with ONLY a JSON object with this structure:\n\
         {\"technology_name\": \"name\", \"overview\": \"detailed overview\", \
         \"pros\": [\"...\"], \"cons\": [\"...\"], \"use_cases\": [\"...\"], \
         \"recommendation_score\": 0.0-1.0}\n\
         No explanation outside the JSON.",
    );
    prompt
}

/// Extract the JSON object from the LLM answer and deserialize it. The model
/// sometimes wraps the object in prose or a code fence; take the outermost
/// braces. Returns None when nothing parseable is found.
fn parse_analysis(content: &str, requested_name: &str) -> Option<TechnologyAnalysis> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<TechnologyAnalysis>(&content[start..=end]) {
        Ok(mut analysis) => {
            if analysis.technology_name.is_empty() {
                analysis.technology_name = requested_name.to_string();
            }
            Some(analysis)
        }
        Err(e) => {
            tracing::warn!("Failed to parse technology analysis: {e}");
            None
        }
    }
}

/// Build a degraded analysis from the static table.
fn knowledge_base_analysis(kb: &KnowledgeBase, name: &str) -> Option<TechnologyAnalysis> {
    let (category, entry) = kb.find(name)?;
    Some(TechnologyAnalysis {
        technology_name: entry.name.to_string(),
        overview: build_overview(category, entry),
        pros: entry.pros.iter().map(|s| s.to_string()).collect(),
        cons: entry.cons.iter().map(|s| s.to_string()).collect(),
        use_cases: entry.best_for.iter().map(|s| s.to_string()).collect(),
        recommendation_score: entry.compatibility,
    })
}

fn build_overview(category: Category, entry: &TechEntry) -> String {
    format!(
        "{} is a widely used {} technology, best suited for {}.",
        entry.name,
        category,
        entry.best_for.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clean_json() {
        let content = r#"{"technology_name": "React", "overview": "A UI library", "pros": ["fast"], "cons": ["churn"], "use_cases": ["SPAs"], "recommendation_score": 0.9}"#;
        let analysis = parse_analysis(content, "React").unwrap();
        assert_eq!(analysis.technology_name, "React");
        assert_eq!(analysis.recommendation_score, 0.9);
    }

    #[test]
    fn test_parse_json_in_prose() {
        let content = "Here is the analysis:\n```json\n{\"technology_name\": \"Go\", \"overview\": \"x\", \"pros\": [], \"cons\": [], \"use_cases\": [], \"recommendation_score\": 0.8}\n```\nHope that helps!";
        let analysis = parse_analysis(content, "Go").unwrap();
        assert_eq!(analysis.technology_name, "Go");
    }

    #[test]
    fn test_parse_fills_missing_name() {
        let content = r#"{"technology_name": "", "overview": "x", "pros": [], "cons": [], "use_cases": [], "recommendation_score": 0.5}"#;
        let analysis = parse_analysis(content, "Svelte").unwrap();
        assert_eq!(analysis.technology_name, "Svelte");
    }

    #[test]
    fn test_parse_garbage_returns_none() {
        assert!(parse_analysis("no json here", "React").is_none());
        assert!(parse_analysis("} backwards {", "React").is_none());
        assert!(parse_analysis("{broken", "React").is_none());
    }

    #[test]
    fn test_knowledge_base_fallback_known_tech() {
        let kb = KnowledgeBase::builtin();
        let analysis = knowledge_base_analysis(&kb, "Redis").unwrap();
        assert_eq!(analysis.technology_name, "Redis");
        assert_eq!(analysis.recommendation_score, 0.85);
        assert!(analysis.overview.contains("database technology"));
        assert_eq!(analysis.use_cases, vec!["caching", "sessions", "real-time"]);
    }

    #[test]
    fn test_knowledge_base_fallback_unknown_tech() {
        let kb = KnowledgeBase::builtin();
        assert!(knowledge_base_analysis(&kb, "FORTRAN").is_none());
    }
}
