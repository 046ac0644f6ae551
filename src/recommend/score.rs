//! Aggregate scoring and cross-technology compatibility analysis.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::knowledge::{KnowledgeBase, TechEntry};
use crate::models::{CompatibilityEntry, CompatibilityReport};

/// Arithmetic mean of the compatibility scores of the selected entries.
/// Scoring an empty selection is an explicit error, never a NaN.
pub fn overall_score(entries: &[&TechEntry]) -> Result<f64> {
    mean(entries.iter().map(|e| e.compatibility))
}

fn mean(scores: impl Iterator<Item = f64>) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for score in scores {
        sum += score;
        count += 1;
    }
    if count == 0 {
        anyhow::bail!("cannot score an empty selection");
    }
    Ok(sum / count as f64)
}

/// Analyze compatibility between arbitrary technology names.
///
/// Known names report their table compatibility and category; unknown names
/// fall back to a fixed 0.7 score with category "unknown". The overall score
/// is the mean across all input names.
pub fn analyze_compatibility(kb: &KnowledgeBase, technologies: &[String]) -> Result<CompatibilityReport> {
    let mut matrix = BTreeMap::new();

    for tech in technologies {
        let entry = match kb.find(tech) {
            Some((category, found)) => CompatibilityEntry {
                score: found.compatibility,
                notes: format!("{tech} integrates well with modern development stacks"),
                category: category.as_str().to_string(),
            },
            None => CompatibilityEntry {
                score: 0.7,
                notes: format!("{tech} compatibility varies by implementation"),
                category: "unknown".to_string(),
            },
        };
        matrix.insert(tech.clone(), entry);
    }

    // Mean over the input list, not the deduplicated matrix: repeating a
    // name weights it accordingly, matching the per-input-name contract.
    let overall = mean(technologies.iter().map(|t| {
        matrix
            .get(t)
            .map(|e| e.score)
            .unwrap_or(0.7)
    }))?;

    Ok(CompatibilityReport {
        compatibility_matrix: matrix,
        overall_score: overall,
        recommendations: vec![
            "All selected technologies are generally compatible".to_string(),
            "Consider using TypeScript for better type safety across the stack".to_string(),
            "Implement proper API design patterns for better integration".to_string(),
            "Use containerization (Docker) for consistent deployment".to_string(),
        ],
    })
}
