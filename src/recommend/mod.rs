//! The rule-based stack recommendation engine.
//!
//! A pure function of (knowledge base, request): selection picks one
//! technology name per applicable category via ordered keyword rules,
//! assembly turns the names into the full response with score, reasoning,
//! and time estimates. No I/O, no clock, no randomness — identical input
//! always produces identical output.

pub mod estimate;
pub mod score;
pub mod select;

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use crate::knowledge::{Category, KnowledgeBase};
use crate::models::{RecommendRequest, StackRecommendation, TechnologyRecommendation};

/// Run the selection rule chains for a request.
///
/// Returns (category, technology name) pairs in table order. Frontend is
/// only present for project types that include one.
pub fn select_stack(req: &RecommendRequest) -> Vec<(Category, &'static str)> {
    let experience = req.experience_level();
    let mut selection = Vec::with_capacity(3);

    if select::includes_frontend(&req.project_type) {
        selection.push((
            Category::Frontend,
            select::select_frontend(&req.requirements, experience),
        ));
    }
    selection.push((
        Category::Backend,
        select::select_backend(&req.requirements, experience, &req.project_type),
    ));
    selection.push((
        Category::Database,
        select::select_database(&req.requirements, &req.project_type),
    ));

    selection
}

/// Replace selected names with overrides for categories already present in
/// the selection. Override names must exist in the knowledge base under the
/// same category; anything else is ignored.
pub fn apply_overrides(
    kb: &KnowledgeBase,
    selection: &mut [(Category, &'static str)],
    overrides: &BTreeMap<Category, String>,
) {
    for (category, name) in selection.iter_mut() {
        if let Some(wanted) = overrides.get(category) {
            if let Some(entry) = kb.get(*category, wanted) {
                *name = entry.name;
            }
        }
    }
}

/// Assemble the full recommendation response for a selection.
pub fn assemble(
    kb: &KnowledgeBase,
    selection: &[(Category, &'static str)],
    req: &RecommendRequest,
) -> Result<StackRecommendation> {
    let mut entries = Vec::with_capacity(selection.len());
    for (category, name) in selection {
        let entry = kb
            .get(*category, name)
            .with_context(|| format!("{name} missing from the {category} table"))?;
        entries.push((*category, entry));
    }

    let overall = score::overall_score(
        &entries.iter().map(|(_, e)| *e).collect::<Vec<_>>(),
    )?;

    let curves: Vec<_> = entries.iter().map(|(_, e)| e.learning_curve).collect();
    let experience = req.experience_level();

    let recommended_stack: BTreeMap<_, _> = entries
        .iter()
        .map(|(category, entry)| {
            (
                *category,
                TechnologyRecommendation::from_entry(*category, entry),
            )
        })
        .collect();

    Ok(StackRecommendation {
        reasoning: build_reasoning(&entries, &req.project_type, &req.requirements),
        recommended_stack,
        overall_score: overall,
        alternatives: alternatives(),
        estimated_learning_time: estimate::estimate_learning_time(&curves, experience).to_string(),
        estimated_development_time: estimate::estimate_development_time(
            &req.project_type,
            req.team_size(),
        ),
    })
}

/// Rule-based recommendation in one call: select then assemble.
pub fn recommend_stack(kb: &KnowledgeBase, req: &RecommendRequest) -> Result<StackRecommendation> {
    let selection = select_stack(req);
    assemble(kb, &selection, req)
}

/// One sentence naming the chosen stack and echoing up to 3 requirements.
fn build_reasoning(
    entries: &[(Category, &crate::knowledge::TechEntry)],
    project_type: &str,
    requirements: &[String],
) -> String {
    let names: Vec<&str> = entries.iter().map(|(_, e)| e.name).collect();
    let echoed: Vec<&str> = requirements
        .iter()
        .take(3)
        .map(|s| s.as_str())
        .collect();
    format!(
        "This stack ({}) provides an excellent balance for {} projects with requirements like {}. \
         The combination offers good performance, maintainability, and community support.",
        names.join(", "),
        project_type,
        echoed.join(", ")
    )
}

/// Canned alternative stacks. Not derived from the request.
fn alternatives() -> Vec<String> {
    vec![
        "Vue.js + Express.js + MongoDB".to_string(),
        "Angular + Python/Django + PostgreSQL".to_string(),
        "Svelte + Go + Redis".to_string(),
    ]
}
