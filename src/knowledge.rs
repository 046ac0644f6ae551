//! Static technology knowledge base consulted by the recommendation engine.
//!
//! Built once at startup, shared read-only for the process lifetime. No
//! update or versioning logic: the table is the single source of truth for
//! selection, scoring, and the `/api/ai/technologies` listing.

use serde::{Deserialize, Serialize};

/// Technology category. Declaration order is the table iteration order used
/// by cross-category lookups and by response map ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Database,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Database => "database",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How hard a technology is to pick up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningCurve {
    Easy,
    Moderate,
    Steep,
}

/// One technology in the knowledge base.
#[derive(Debug, Clone)]
pub struct TechEntry {
    pub name: &'static str,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
    pub learning_curve: LearningCurve,
    /// Popularity in [0, 1].
    pub popularity: f64,
    /// Compatibility with common stacks, in [0, 1]. Feeds the overall score.
    pub compatibility: f64,
    /// Human-readable strengths, used only for the generated reason text.
    pub best_for: &'static [&'static str],
}

/// Ordered category tables. Immutable after construction.
pub struct KnowledgeBase {
    categories: Vec<(Category, Vec<TechEntry>)>,
}

impl KnowledgeBase {
    /// The built-in table. Category order is frontend, backend, database.
    pub fn builtin() -> Self {
        use LearningCurve::{Easy, Moderate, Steep};

        let frontend = vec![
            TechEntry {
                name: "React",
                pros: &["Large ecosystem", "Component reusability", "Strong community"],
                cons: &["Steep learning curve", "Frequent updates"],
                learning_curve: Moderate,
                popularity: 0.95,
                compatibility: 0.9,
                best_for: &["web apps", "SPAs", "enterprise"],
            },
            TechEntry {
                name: "Vue.js",
                pros: &["Easy to learn", "Great documentation", "Progressive framework"],
                cons: &["Smaller ecosystem", "Less job market"],
                learning_curve: Easy,
                popularity: 0.8,
                compatibility: 0.85,
                best_for: &["small to medium apps", "rapid prototyping"],
            },
            TechEntry {
                name: "Angular",
                pros: &["Full framework", "TypeScript built-in", "Enterprise ready"],
                cons: &["Complex", "Heavy", "Steep learning curve"],
                learning_curve: Steep,
                popularity: 0.7,
                compatibility: 0.8,
                best_for: &["enterprise apps", "large teams"],
            },
            TechEntry {
                name: "Svelte",
                pros: &["No runtime", "Small bundle size", "Simple syntax"],
                cons: &["Smaller community", "Fewer resources"],
                learning_curve: Easy,
                popularity: 0.6,
                compatibility: 0.75,
                best_for: &["performance-critical apps", "small bundles"],
            },
        ];

        let backend = vec![
            TechEntry {
                name: "Node.js",
                pros: &["JavaScript everywhere", "Fast development", "Large ecosystem"],
                cons: &["Single-threaded", "Callback complexity"],
                learning_curve: Moderate,
                popularity: 0.9,
                compatibility: 0.95,
                best_for: &["APIs", "real-time apps", "microservices"],
            },
            TechEntry {
                name: "Python",
                pros: &["Easy syntax", "AI/ML libraries", "Versatile"],
                cons: &["Performance", "GIL limitations"],
                learning_curve: Easy,
                popularity: 0.85,
                compatibility: 0.8,
                best_for: &["APIs", "data processing", "AI/ML"],
            },
            TechEntry {
                name: "Go",
                pros: &["Fast execution", "Simple deployment", "Great concurrency"],
                cons: &["Verbose", "Limited generics"],
                learning_curve: Moderate,
                popularity: 0.7,
                compatibility: 0.75,
                best_for: &["microservices", "system programming", "APIs"],
            },
        ];

        let database = vec![
            TechEntry {
                name: "PostgreSQL",
                pros: &["ACID compliance", "Advanced features", "Reliable"],
                cons: &["Complex setup", "Resource intensive"],
                learning_curve: Moderate,
                popularity: 0.85,
                compatibility: 0.9,
                best_for: &["complex queries", "enterprise apps"],
            },
            TechEntry {
                name: "MongoDB",
                pros: &["Schema flexibility", "Easy scaling", "JSON-like"],
                cons: &["Consistency issues", "Memory usage"],
                learning_curve: Easy,
                popularity: 0.8,
                compatibility: 0.8,
                best_for: &["rapid development", "document storage"],
            },
            TechEntry {
                name: "Redis",
                pros: &["In-memory speed", "Data structures", "Caching"],
                cons: &["Memory limits", "Persistence complexity"],
                learning_curve: Easy,
                popularity: 0.75,
                compatibility: 0.85,
                best_for: &["caching", "sessions", "real-time"],
            },
        ];

        Self {
            categories: vec![
                (Category::Frontend, frontend),
                (Category::Backend, backend),
                (Category::Database, database),
            ],
        }
    }

    /// All entries for a category.
    pub fn entries(&self, category: Category) -> &[TechEntry] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Look up a technology by name within a category.
    pub fn get(&self, category: Category, name: &str) -> Option<&TechEntry> {
        self.entries(category).iter().find(|e| e.name == name)
    }

    /// Look up a technology across all categories, first match in table order.
    pub fn find(&self, name: &str) -> Option<(Category, &TechEntry)> {
        self.categories.iter().find_map(|(category, entries)| {
            entries
                .iter()
                .find(|e| e.name == name)
                .map(|e| (*category, e))
        })
    }

    /// Categories in table order with their entries.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[TechEntry])> {
        self.categories
            .iter()
            .map(|(c, entries)| (*c, entries.as_slice()))
    }

    /// Category → technology names, for the static `/api/ai/technologies` listing.
    pub fn technology_names(&self) -> Vec<(Category, Vec<&'static str>)> {
        self.categories
            .iter()
            .map(|(c, entries)| (*c, entries.iter().map(|e| e.name).collect()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_non_empty() {
        let kb = KnowledgeBase::builtin();
        for (category, entries) in kb.iter() {
            assert!(!entries.is_empty(), "empty category: {category}");
        }
    }

    #[test]
    fn test_names_unique_within_category() {
        let kb = KnowledgeBase::builtin();
        for (category, entries) in kb.iter() {
            let names: HashSet<&str> = entries.iter().map(|e| e.name).collect();
            assert_eq!(names.len(), entries.len(), "duplicate name in {category}");
        }
    }

    #[test]
    fn test_scores_within_unit_interval() {
        let kb = KnowledgeBase::builtin();
        for (_, entries) in kb.iter() {
            for e in entries {
                assert!((0.0..=1.0).contains(&e.popularity), "{}", e.name);
                assert!((0.0..=1.0).contains(&e.compatibility), "{}", e.name);
            }
        }
    }

    #[test]
    fn test_find_scans_categories_in_table_order() {
        let kb = KnowledgeBase::builtin();
        let (category, entry) = kb.find("React").unwrap();
        assert_eq!(category, Category::Frontend);
        assert_eq!(entry.compatibility, 0.9);

        let (category, _) = kb.find("Redis").unwrap();
        assert_eq!(category, Category::Database);

        assert!(kb.find("COBOL").is_none());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Category::Frontend).unwrap(),
            serde_json::json!("frontend")
        );
        assert_eq!(
            serde_json::to_value(LearningCurve::Steep).unwrap(),
            serde_json::json!("steep")
        );
    }
}
