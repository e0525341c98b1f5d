//! Resource recommender. Pure lookups over the static tables in `resources`:
//! no ranking, no randomness, fixed category order.

use serde::Serialize;
use tracing::debug;

use crate::analysis::context::Branch;
use crate::learning::resources::{
    branch_resources, interview_area_resources, skill_resources, Resource, INTERVIEW_PREP,
};

const BRANCH_CHANNELS: usize = 2;
const BRANCH_PLAYLISTS: usize = 2;
const SKILLS_CONSIDERED: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub category: String,
    pub resources: Vec<Resource>,
    pub priority: Priority,
}

/// Builds the recommendation list in fixed order:
///
/// 1. `"<Branch> Fundamentals"` (two channels, two playlists) for a named branch.
/// 2. `"Skill Enhancement"` from the first five skills, exact lowercase key.
/// 3. `"Interview Preparation"`, always present.
/// 4. `"Areas for Improvement"` from weak areas, keys lowercased with spaces removed.
///
/// Categories that would be empty are omitted, except interview preparation.
pub fn recommend(skills: &[String], branch: &str, weak_areas: &[String]) -> Vec<Category> {
    let mut categories = Vec::new();
    let branch = Branch::from_name(branch);

    if let Some(tables) = branch_resources(branch) {
        let resources = tables
            .channels
            .iter()
            .take(BRANCH_CHANNELS)
            .chain(tables.playlists.iter().take(BRANCH_PLAYLISTS))
            .copied()
            .collect();
        categories.push(Category {
            category: format!("{} Fundamentals", branch.display_name()),
            resources,
            priority: Priority::High,
        });
    }

    let skill_links: Vec<Resource> = skills
        .iter()
        .take(SKILLS_CONSIDERED)
        .filter_map(|skill| skill_resources(&skill.to_lowercase()))
        .flatten()
        .copied()
        .collect();
    if !skill_links.is_empty() {
        categories.push(Category {
            category: "Skill Enhancement".to_string(),
            resources: skill_links,
            priority: Priority::Medium,
        });
    }

    categories.push(Category {
        category: "Interview Preparation".to_string(),
        resources: INTERVIEW_PREP.to_vec(),
        priority: Priority::High,
    });

    let weak_links: Vec<Resource> = weak_areas
        .iter()
        .map(|area| area.to_lowercase().replace(' ', ""))
        .filter_map(|key| skill_resources(&key).or_else(|| interview_area_resources(&key)))
        .flatten()
        .copied()
        .collect();
    if !weak_links.is_empty() {
        categories.push(Category {
            category: "Areas for Improvement".to_string(),
            resources: weak_links,
            priority: Priority::High,
        });
    }

    debug!(
        branch = %branch,
        skills = skills.len(),
        weak_areas = weak_areas.len(),
        categories = categories.len(),
        "built learning recommendations"
    );
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn names(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.category.as_str()).collect()
    }

    #[test]
    fn test_full_recommendation_order() {
        let categories = recommend(
            &strings(&["Python", "React"]),
            "Computer Science",
            &strings(&["communication"]),
        );
        assert_eq!(
            names(&categories),
            vec![
                "Computer Science Fundamentals",
                "Skill Enhancement",
                "Interview Preparation",
                "Areas for Improvement",
            ]
        );
        assert_eq!(categories[0].resources.len(), 4);
        assert_eq!(categories[0].priority, Priority::High);
        assert_eq!(categories[1].resources.len(), 4);
        assert_eq!(categories[1].priority, Priority::Medium);
    }

    #[test]
    fn test_branch_takes_two_channels_then_two_playlists() {
        let categories = recommend(&[], "Computer Science", &[]);
        let titles: Vec<_> = categories[0].resources.iter().map(|r| r.title).collect();
        assert_eq!(
            titles,
            vec![
                "freeCodeCamp.org",
                "Traversy Media",
                "Data Structures and Algorithms",
                "System Design Interview",
            ]
        );
    }

    #[test]
    fn test_unknown_branch_and_skills_leave_only_interview_prep() {
        let categories = recommend(&strings(&["cobol", "fortran"]), "Biotech", &[]);
        assert_eq!(names(&categories), vec!["Interview Preparation"]);
        assert_eq!(categories[0].resources, INTERVIEW_PREP.to_vec());
    }

    #[test]
    fn test_only_first_five_skills_considered() {
        let skills = strings(&["a", "b", "c", "d", "e", "python"]);
        let categories = recommend(&skills, "", &[]);
        assert_eq!(names(&categories), vec!["Interview Preparation"]);
    }

    #[test]
    fn test_skill_lookup_is_not_substring() {
        let categories = recommend(&strings(&["python3", "reactjs"]), "", &[]);
        assert!(!names(&categories).contains(&"Skill Enhancement"));
    }

    #[test]
    fn test_weak_area_keys_strip_spaces() {
        // "Machine Learning" normalises to "machinelearning", which has no entry.
        let categories = recommend(&[], "", &strings(&["Machine Learning", "Java Script"]));
        let last = categories.last().unwrap();
        assert_eq!(last.category, "Areas for Improvement");
        assert_eq!(last.resources.len(), 2);
        assert_eq!(last.resources[0].title, "JavaScript Crash Course");
    }

    #[test]
    fn test_session_weak_areas_map_to_interview_resources() {
        let categories = recommend(&[], "", &strings(&["content", "confidence"]));
        let last = categories.last().unwrap();
        assert_eq!(last.category, "Areas for Improvement");
        assert_eq!(last.resources.len(), 3);
    }

    #[test]
    fn test_branch_name_ignores_case() {
        let categories = recommend(&[], "civil", &[]);
        assert_eq!(categories[0].category, "Civil Fundamentals");
    }
}
