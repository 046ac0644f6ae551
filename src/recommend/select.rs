//! Ordered keyword rule chains for category selection.
//!
//! Every check is a plain substring test over the case-folded join of the
//! requirements list. First matching rule wins. No fuzzy matching: changing
//! the matching strategy would change observable behavior.

/// Join requirements into the lowercase blob the rule chains scan.
fn requirements_blob(requirements: &[String]) -> String {
    requirements.join(" ").to_lowercase()
}

/// Case-insensitive check for the "beginner" token in the experience level.
pub fn is_beginner(experience_level: &str) -> bool {
    experience_level.to_lowercase().contains("beginner")
}

/// Pick a frontend technology.
/// Callers only invoke this for project types that include a frontend
/// ("web" and "fullstack").
pub fn select_frontend(requirements: &[String], experience_level: &str) -> &'static str {
    let blob = requirements_blob(requirements);
    if is_beginner(experience_level) {
        "Vue.js"
    } else if blob.contains("enterprise") {
        "Angular"
    } else if blob.contains("performance") {
        "Svelte"
    } else {
        "React"
    }
}

/// Pick a backend technology.
/// `experience_level` and `project_type` are part of the call shape but do
/// not participate in this rule chain.
pub fn select_backend(
    requirements: &[String],
    _experience_level: &str,
    _project_type: &str,
) -> &'static str {
    let blob = requirements_blob(requirements);
    if blob.contains("ai") || blob.contains("machine learning") {
        "Python"
    } else if blob.contains("performance") || blob.contains("microservices") {
        "Go"
    } else {
        "Node.js"
    }
}

/// Pick a database technology. `project_type` does not participate.
pub fn select_database(requirements: &[String], _project_type: &str) -> &'static str {
    let blob = requirements_blob(requirements);
    if blob.contains("real-time") || blob.contains("cache") {
        "Redis"
    } else if blob.contains("flexible") || blob.contains("rapid") {
        "MongoDB"
    } else {
        "PostgreSQL"
    }
}

/// Whether a project type gets a frontend recommendation at all.
/// Matched case-sensitively against the known set.
pub fn includes_frontend(project_type: &str) -> bool {
    matches!(project_type, "web" | "fullstack")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_frontend_default_without_trigger_keywords() {
        // No "enterprise", no "performance", non-beginner: always React.
        for requirements in [
            reqs(&[]),
            reqs(&["user accounts", "payments"]),
            reqs(&["dashboards", "reporting", "exports"]),
        ] {
            assert_eq!(select_frontend(&requirements, "intermediate"), "React");
        }
    }

    #[test]
    fn test_frontend_beginner_wins_over_keywords() {
        // Rule 1 is checked before the keyword rules.
        let requirements = reqs(&["enterprise", "performance"]);
        assert_eq!(select_frontend(&requirements, "beginner"), "Vue.js");
        assert_eq!(select_frontend(&requirements, "Total Beginner"), "Vue.js");
    }

    #[test]
    fn test_frontend_enterprise_before_performance() {
        let requirements = reqs(&["performance", "enterprise"]);
        assert_eq!(select_frontend(&requirements, "senior"), "Angular");
    }

    #[test]
    fn test_frontend_performance() {
        let requirements = reqs(&["raw Performance matters"]);
        assert_eq!(select_frontend(&requirements, "senior"), "Svelte");
    }

    #[test]
    fn test_backend_ai_keyword_is_monotonic() {
        // Adding "ai" to any requirement list without other triggers always
        // yields Python, regardless of surrounding content.
        for mut requirements in [
            reqs(&[]),
            reqs(&["user accounts"]),
            reqs(&["dashboards", "exports", "auth"]),
        ] {
            requirements.push("ai".to_string());
            assert_eq!(select_backend(&requirements, "senior", "web"), "Python");
        }
    }

    #[test]
    fn test_backend_ai_matches_as_substring() {
        // "maintain" contains "ai": the blob check is substring containment,
        // not word matching.
        let requirements = reqs(&["easy to maintain"]);
        assert_eq!(select_backend(&requirements, "senior", "web"), "Python");
    }

    #[test]
    fn test_backend_machine_learning() {
        let requirements = reqs(&["Machine Learning pipeline"]);
        assert_eq!(select_backend(&requirements, "senior", "api"), "Python");
    }

    #[test]
    fn test_backend_performance_and_default() {
        assert_eq!(
            select_backend(&reqs(&["high performance"]), "senior", "web"),
            "Go"
        );
        assert_eq!(
            select_backend(&reqs(&["microservices"]), "senior", "web"),
            "Go"
        );
        assert_eq!(select_backend(&reqs(&["CRUD"]), "senior", "web"), "Node.js");
    }

    #[test]
    fn test_backend_ignores_project_type_and_experience() {
        let requirements = reqs(&["microservices"]);
        assert_eq!(select_backend(&requirements, "beginner", "web"), "Go");
        assert_eq!(select_backend(&requirements, "expert", "mobile"), "Go");
    }

    #[test]
    fn test_database_rules() {
        assert_eq!(select_database(&reqs(&["real-time updates"]), "web"), "Redis");
        assert_eq!(select_database(&reqs(&["cache layer"]), "web"), "Redis");
        assert_eq!(select_database(&reqs(&["flexible schema"]), "web"), "MongoDB");
        assert_eq!(select_database(&reqs(&["rapid prototyping"]), "web"), "MongoDB");
        assert_eq!(select_database(&reqs(&["reports"]), "web"), "PostgreSQL");
        assert_eq!(select_database(&reqs(&[]), "web"), "PostgreSQL");
    }

    #[test]
    fn test_database_real_time_before_flexible() {
        let requirements = reqs(&["flexible", "real-time"]);
        assert_eq!(select_database(&requirements, "web"), "Redis");
    }

    #[test]
    fn test_includes_frontend_is_case_sensitive() {
        assert!(includes_frontend("web"));
        assert!(includes_frontend("fullstack"));
        assert!(!includes_frontend("Web"));
        assert!(!includes_frontend("api"));
        assert!(!includes_frontend("mobile"));
    }
}
