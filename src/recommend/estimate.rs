//! Learning-time and development-time estimators.

use crate::knowledge::LearningCurve;
use crate::recommend::select::is_beginner;

/// Estimate how long the selected stack takes to learn.
///
/// Only the set of learning-curve values matters, not how many entries have
/// each one. "steep" is checked before "moderate" in both branches.
pub fn estimate_learning_time(curves: &[LearningCurve], experience_level: &str) -> &'static str {
    let has_steep = curves.contains(&LearningCurve::Steep);
    let has_moderate = curves.contains(&LearningCurve::Moderate);

    if is_beginner(experience_level) {
        if has_steep {
            "3-6 months"
        } else if has_moderate {
            "2-4 months"
        } else {
            "1-2 months"
        }
    } else if has_steep {
        "1-3 months"
    } else if has_moderate {
        "2-6 weeks"
    } else {
        "1-4 weeks"
    }
}

/// Estimate development time from project type and team size.
///
/// Floor division throughout:
/// `adjusted = max(2, base_weeks / max(1, team_size / 2))`, output
/// "{adjusted}-{adjusted + 4} weeks". Unknown project types use the web
/// baseline of 8 weeks.
pub fn estimate_development_time(project_type: &str, team_size: u32) -> String {
    let base_weeks: u32 = match project_type {
        "web" => 8,
        "mobile" => 12,
        "api" => 4,
        "fullstack" => 16,
        _ => 8,
    };

    let adjusted = std::cmp::max(2, base_weeks / std::cmp::max(1, team_size / 2));
    format!("{}-{} weeks", adjusted, adjusted + 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LearningCurve::{Easy, Moderate, Steep};

    #[test]
    fn test_learning_time_beginner() {
        assert_eq!(estimate_learning_time(&[Steep, Easy], "beginner"), "3-6 months");
        assert_eq!(
            estimate_learning_time(&[Moderate, Easy], "beginner"),
            "2-4 months"
        );
        assert_eq!(estimate_learning_time(&[Easy, Easy], "beginner"), "1-2 months");
    }

    #[test]
    fn test_learning_time_non_beginner() {
        assert_eq!(estimate_learning_time(&[Steep], "senior"), "1-3 months");
        assert_eq!(estimate_learning_time(&[Moderate, Easy], "senior"), "2-6 weeks");
        assert_eq!(estimate_learning_time(&[Easy], "senior"), "1-4 weeks");
    }

    #[test]
    fn test_learning_time_steep_checked_before_moderate() {
        // A single steep entry dominates any number of moderate ones.
        assert_eq!(
            estimate_learning_time(&[Moderate, Moderate, Steep], "senior"),
            "1-3 months"
        );
    }

    #[test]
    fn test_development_time_api_team_of_four() {
        // base_weeks = 4, team_size = 4 → team_size / 2 = 2,
        // 4 / 2 = 2, max(2, 2) = 2 → "2-6 weeks".
        assert_eq!(estimate_development_time("api", 4), "2-6 weeks");
    }

    #[test]
    fn test_development_time_web_solo() {
        // base = 8, team_size / 2 = 0, max(1, 0) = 1, 8 / 1 = 8 → "8-12 weeks".
        assert_eq!(estimate_development_time("web", 1), "8-12 weeks");
    }

    #[test]
    fn test_development_time_floor_division() {
        // team_size = 5 → 5 / 2 = 2 (floor), 12 / 2 = 6.
        assert_eq!(estimate_development_time("mobile", 5), "6-10 weeks");
        // team_size = 7 → 7 / 2 = 3, 16 / 3 = 5 (floor).
        assert_eq!(estimate_development_time("fullstack", 7), "5-9 weeks");
    }

    #[test]
    fn test_development_time_floor_of_two_weeks() {
        // Large team: 4 / max(1, 10) = 0 → clamped to 2.
        assert_eq!(estimate_development_time("api", 20), "2-6 weeks");
    }

    #[test]
    fn test_development_time_unknown_type_uses_web_baseline() {
        assert_eq!(
            estimate_development_time("desktop", 4),
            estimate_development_time("web", 4)
        );
    }
}
