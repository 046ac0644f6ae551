use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::knowledge::{Category, LearningCurve, TechEntry};

/// Stack recommendation request
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    /// Project type (web, mobile, api, fullstack, ...)
    pub project_type: String,
    /// Free-text requirements
    pub requirements: Vec<String>,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub experience_level: Option<String>,
    /// Budget note, forwarded to the LLM prompt only
    #[serde(default)]
    pub budget: Option<String>,
    /// Timeline note, forwarded to the LLM prompt only
    #[serde(default)]
    pub timeline: Option<String>,
}

impl RecommendRequest {
    pub fn team_size(&self) -> u32 {
        self.team_size.unwrap_or(3)
    }

    pub fn experience_level(&self) -> &str {
        self.experience_level.as_deref().unwrap_or("intermediate")
    }
}

/// One recommended technology in the response
#[derive(Debug, Clone, Serialize)]
pub struct TechnologyRecommendation {
    pub name: String,
    pub category: Category,
    pub reason: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub learning_curve: LearningCurve,
    pub popularity_score: f64,
    pub compatibility_score: f64,
}

impl TechnologyRecommendation {
    /// Build the response shape for a knowledge-base entry.
    pub fn from_entry(category: Category, entry: &TechEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            category,
            reason: format!("Selected for {}", entry.best_for.join(", ")),
            pros: entry.pros.iter().map(|s| s.to_string()).collect(),
            cons: entry.cons.iter().map(|s| s.to_string()).collect(),
            learning_curve: entry.learning_curve,
            popularity_score: entry.popularity,
            compatibility_score: entry.compatibility,
        }
    }
}

/// Stack recommendation response
#[derive(Debug, Clone, Serialize)]
pub struct StackRecommendation {
    pub recommended_stack: BTreeMap<Category, TechnologyRecommendation>,
    pub overall_score: f64,
    pub reasoning: String,
    pub alternatives: Vec<String>,
    pub estimated_learning_time: String,
    pub estimated_development_time: String,
}

/// One row of the compatibility matrix
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityEntry {
    pub score: f64,
    pub notes: String,
    /// Category name, or "unknown" for technologies not in the table
    pub category: String,
}

/// Compatibility analysis response
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityReport {
    pub compatibility_matrix: BTreeMap<String, CompatibilityEntry>,
    pub overall_score: f64,
    pub recommendations: Vec<String>,
}

/// Technology analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeTechnologyRequest {
    pub technology_name: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub comparison_with: Option<Vec<String>>,
}

/// Technology analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologyAnalysis {
    pub technology_name: String,
    pub overview: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub use_cases: Vec<String>,
    pub recommendation_score: f64,
}

/// A document submitted for indexing
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInput {
    /// Caller-supplied id; positional fallback is generated when absent
    #[serde(default)]
    pub id: Option<String>,
    pub content: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Document indexing request
#[derive(Debug, Clone, Deserialize)]
pub struct IndexDocumentsRequest {
    pub documents: Vec<DocumentInput>,
    #[serde(default)]
    pub namespace: Option<String>,
}

/// Document indexing response
#[derive(Debug, Clone, Serialize)]
pub struct IndexDocumentsResponse {
    pub status: String,
    pub indexed_count: usize,
}

/// Semantic search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_search_limit")]
    pub limit: usize,
    #[serde(default)]
    pub namespace: Option<String>,
}

fn default_search_limit() -> usize {
    10
}

/// A single semantic search result
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub content: String,
    pub metadata: serde_json::Value,
    pub score: f64,
}

/// Semantic search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_count: usize,
}

/// Service status response
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub llm_available: bool,
    pub vector_available: bool,
    pub features: FeatureFlags,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureFlags {
    pub basic_recommendations: bool,
    pub ai_enhanced_recommendations: bool,
    pub semantic_search: bool,
    pub knowledge_base: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_defaults() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"project_type": "web", "requirements": []}"#).unwrap();
        assert_eq!(req.team_size(), 3);
        assert_eq!(req.experience_level(), "intermediate");
        assert!(req.budget.is_none());
    }

    #[test]
    fn test_search_request_default_limit() {
        let req: SearchRequest = serde_json::from_str(r#"{"query": "caching"}"#).unwrap();
        assert_eq!(req.limit, 10);
        assert!(req.namespace.is_none());
    }

    #[test]
    fn test_recommended_stack_map_keys_follow_category_order() {
        // BTreeMap keyed by Category must serialize frontend before backend
        // before database, matching the table order.
        let kb = crate::knowledge::KnowledgeBase::builtin();
        let mut stack = BTreeMap::new();
        for (category, entries) in kb.iter() {
            stack.insert(
                category,
                TechnologyRecommendation::from_entry(category, &entries[0]),
            );
        }
        let json = serde_json::to_string(&stack).unwrap();
        let frontend = json.find("\"frontend\"").unwrap();
        let backend = json.find("\"backend\"").unwrap();
        let database = json.find("\"database\"").unwrap();
        assert!(frontend < backend && backend < database);
    }

    #[test]
    fn test_reason_built_from_best_for() {
        let kb = crate::knowledge::KnowledgeBase::builtin();
        let entry = kb.get(Category::Frontend, "React").unwrap();
        let rec = TechnologyRecommendation::from_entry(Category::Frontend, entry);
        assert_eq!(rec.reason, "Selected for web apps, SPAs, enterprise");
    }
}
