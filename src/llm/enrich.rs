//! Best-effort LLM enrichment of the rule-based recommendation.
//!
//! One chat-completion call per request, bounded by the configured timeout.
//! The model's free-text answer is scanned for category/technology mentions;
//! only technologies already present in the knowledge base can override the
//! rule-based choice, so a hallucinated name can never leave the table.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::config::LlmConfig;
use crate::knowledge::{Category, KnowledgeBase};
use crate::llm::chat::chat_completion;
use crate::models::RecommendRequest;

/// Ask the LLM for stack overrides. Returns a (possibly empty) category →
/// technology-name map. Callers treat any Err as "no overrides".
pub async fn suggest_overrides(
    client: &reqwest::Client,
    config: &LlmConfig,
    kb: &KnowledgeBase,
    req: &RecommendRequest,
) -> Result<BTreeMap<Category, String>> {
    let prompt = build_stack_prompt(req);
    let response = chat_completion(client, config, &prompt).await?;
    Ok(parse_stack_overrides(&response, kb))
}

/// Build the consultant-style prompt from the request.
fn build_stack_prompt(req: &RecommendRequest) -> String {
    let mut prompt = format!(
        "You are an expert technology consultant. Based on the following project details, \
         recommend the best technology stack:\n\n\
         Project Type: {}\n\
         Requirements: {}\n\
         Experience Level: {}\n\
         Team Size: {}\n",
        req.project_type,
        req.requirements.join(", "),
        req.experience_level(),
        req.team_size(),
    );
    if let Some(budget) = &req.budget {
        prompt.push_str(&format!("Budget: {budget}\n"));
    }
    if let Some(timeline) = &req.timeline {
        prompt.push_str(&format!("Timeline: {timeline}\n"));
    }
    prompt.push_str(
        "\nPlease recommend technologies for these categories:\n\
         1. Frontend Framework\n\
         2. Backend Framework\n\
         3. Database\n\n\
         For each recommendation, provide the technology name and a brief reason. \
         Focus on modern, well-supported technologies that match the experience \
         level and requirements. Respond in a structured format that I can parse.",
    );
    prompt
}

/// Scan the LLM answer for per-category technology mentions.
///
/// A line naming a category sets the scanning context; the first
/// knowledge-base technology of that category mentioned afterwards becomes
/// the override. Unknown names and uncategorized mentions are ignored, so
/// garbage output simply yields no overrides.
pub fn parse_stack_overrides(content: &str, kb: &KnowledgeBase) -> BTreeMap<Category, String> {
    let mut overrides = BTreeMap::new();
    let mut current: Option<Category> = None;

    for line in content.lines() {
        let lower = line.to_lowercase();
        if lower.contains("frontend") {
            current = Some(Category::Frontend);
        } else if lower.contains("backend") {
            current = Some(Category::Backend);
        } else if lower.contains("database") {
            current = Some(Category::Database);
        }

        if let Some(category) = current {
            if overrides.contains_key(&category) {
                continue;
            }
            for entry in kb.entries(category) {
                if line.contains(entry.name) {
                    overrides.insert(category, entry.name.to_string());
                    break;
                }
            }
        }
    }

    overrides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    #[test]
    fn test_parse_structured_answer() {
        let kb = KnowledgeBase::builtin();
        let content = "\
1. Frontend Framework: Svelte - small bundles\n\
2. Backend Framework: Go - great concurrency\n\
3. Database: Redis - in-memory speed\n";
        let overrides = parse_stack_overrides(content, &kb);
        assert_eq!(overrides[&Category::Frontend], "Svelte");
        assert_eq!(overrides[&Category::Backend], "Go");
        assert_eq!(overrides[&Category::Database], "Redis");
    }

    #[test]
    fn test_parse_heading_then_mention_on_next_line() {
        let kb = KnowledgeBase::builtin();
        let content = "Frontend:\nI would go with Vue.js here.\n\nDatabase:\nMongoDB fits.";
        let overrides = parse_stack_overrides(content, &kb);
        assert_eq!(overrides[&Category::Frontend], "Vue.js");
        assert_eq!(overrides[&Category::Database], "MongoDB");
        assert!(!overrides.contains_key(&Category::Backend));
    }

    #[test]
    fn test_parse_first_mention_wins_per_category() {
        let kb = KnowledgeBase::builtin();
        let content = "Frontend: React is solid.\nOr maybe Angular.\n";
        let overrides = parse_stack_overrides(content, &kb);
        assert_eq!(overrides[&Category::Frontend], "React");
    }

    #[test]
    fn test_parse_unknown_names_ignored() {
        let kb = KnowledgeBase::builtin();
        let content = "Frontend: SolidJS\nBackend: Elixir/Phoenix\nDatabase: CockroachDB\n";
        assert!(parse_stack_overrides(content, &kb).is_empty());
    }

    #[test]
    fn test_parse_garbage_yields_no_overrides() {
        let kb = KnowledgeBase::builtin();
        assert!(parse_stack_overrides("I don't understand the question.", &kb).is_empty());
        assert!(parse_stack_overrides("", &kb).is_empty());
    }

    #[test]
    fn test_parse_category_mention_without_tech_is_ignored() {
        let kb = KnowledgeBase::builtin();
        let content = "The backend is the most important part of the system.";
        assert!(parse_stack_overrides(content, &kb).is_empty());
    }

    #[test]
    fn test_prompt_includes_optional_fields_when_present() {
        let req = RecommendRequest {
            project_type: "web".to_string(),
            requirements: vec!["auth".to_string()],
            team_size: Some(5),
            experience_level: Some("beginner".to_string()),
            budget: Some("low".to_string()),
            timeline: Some("3 months".to_string()),
        };
        let prompt = build_stack_prompt(&req);
        assert!(prompt.contains("Project Type: web"));
        assert!(prompt.contains("Team Size: 5"));
        assert!(prompt.contains("Budget: low"));
        assert!(prompt.contains("Timeline: 3 months"));
    }
}
