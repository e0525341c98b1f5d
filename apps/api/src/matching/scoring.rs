//! Per-dimension compatibility scores between a candidate and one employer.
//!
//! Every function is pure and returns a score in [0, 100]. Skill and culture
//! overlap use the symmetric fuzzy match from `analysis::text`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::text::fuzzy_overlaps;
use crate::matching::catalog::{EmployerKind, EmployerProfile};
use crate::matching::profile::{CandidateProfile, Experience};

static SALARY_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)-(\d+)").expect("Invalid salary pattern"));

const NEUTRAL_LOCATION: f64 = 50.0;
const LOCATION_HIT: f64 = 100.0;
const LOCATION_MISS: f64 = 20.0;

const NEUTRAL_CULTURE: f64 = 70.0;
const CULTURE_MISS: f64 = 50.0;
const CULTURE_CAP: f64 = 90.0;

const NEUTRAL_SALARY: f64 = 50.0;
const LARGE_COMPANY_SIZE: &str = "5000+";

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

/// Linear weights for the overall score. The defaults sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill: f64,
    pub culture: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            culture: 0.25,
            experience: 0.15,
            location: 0.15,
            salary: 0.10,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Unrounded sub-scores for one employer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawScores {
    pub skill_match: f64,
    pub location_match: f64,
    pub experience_match: f64,
    pub culture_match: f64,
    pub salary_score: f64,
}

impl RawScores {
    pub fn compute(candidate: &CandidateProfile, employer: &EmployerProfile) -> Self {
        Self {
            skill_match: skill_match(&candidate.skills, &employer.tech_stack),
            location_match: location_match(&candidate.location, &employer.locations),
            experience_match: experience_match(&candidate.experience, employer),
            culture_match: culture_match(
                &candidate.interests,
                &employer.culture,
                &employer.company_values,
            ),
            salary_score: salary_score(&employer.salary_range),
        }
    }

    /// Weighted sum of the unrounded sub-scores.
    pub fn overall(&self, weights: &MatchWeights) -> f64 {
        self.skill_match * weights.skill
            + self.culture_match * weights.culture
            + self.experience_match * weights.experience
            + self.location_match * weights.location
            + self.salary_score * weights.salary
    }
}

/// Share of the employer's stack entries that overlap at least one candidate skill.
/// Zero when either side is empty.
pub fn skill_match(skills: &BTreeSet<String>, tech_stack: &[String]) -> f64 {
    if tech_stack.is_empty() || skills.is_empty() {
        return 0.0;
    }
    let matched = overlapping_entries(skills, tech_stack).count();
    matched as f64 / tech_stack.len() as f64 * 100.0
}

/// Stack entries that overlap any candidate skill, in stack order.
pub fn overlapping_entries<'a>(
    skills: &'a BTreeSet<String>,
    tech_stack: &'a [String],
) -> impl Iterator<Item = &'a String> + 'a {
    tech_stack
        .iter()
        .filter(move |entry| skills.iter().any(|skill| fuzzy_overlaps(skill, entry)))
}

/// 100 on any overlap with the employer's locations, 20 otherwise.
/// Neutral 50 when either side is missing.
pub fn location_match(location: &str, locations: &[String]) -> f64 {
    if location.is_empty() || locations.is_empty() {
        return NEUTRAL_LOCATION;
    }
    if locations.iter().any(|l| fuzzy_overlaps(location, l)) {
        LOCATION_HIT
    } else {
        LOCATION_MISS
    }
}

/// Ordered rule cascade; the first rule that applies wins.
pub fn experience_match(experience: &Experience, employer: &EmployerProfile) -> f64 {
    let years = experience.years();
    match employer.classification() {
        EmployerKind::Startup if years <= 2 => return 90.0,
        EmployerKind::Product if years <= 3 => return 85.0,
        _ => {}
    }
    // Any type containing "Service", case-sensitive; years are never negative.
    if employer.classification() == EmployerKind::Service {
        return 80.0;
    }
    if employer.size == LARGE_COMPANY_SIZE && years >= 1 {
        return 75.0;
    }
    60.0
}

/// 60 + 10 per overlapping interest, capped at 90. 50 when nothing overlaps and
/// 70 when the candidate lists no interests.
pub fn culture_match(interests: &BTreeSet<String>, culture: &[String], values: &[String]) -> f64 {
    if interests.is_empty() {
        return NEUTRAL_CULTURE;
    }
    let matches = interests
        .iter()
        .filter(|interest| {
            culture
                .iter()
                .chain(values)
                .any(|item| fuzzy_overlaps(interest, item))
        })
        .count();
    if matches == 0 {
        CULTURE_MISS
    } else {
        CULTURE_CAP.min(60.0 + matches as f64 * 10.0)
    }
}

/// Bands the midpoint of the first "<min>-<max>" pair in the text.
/// Neutral 50 when no pair parses.
pub fn salary_score(salary_range: &str) -> f64 {
    let Some(caps) = SALARY_RANGE.captures(salary_range) else {
        return NEUTRAL_SALARY;
    };
    let (Ok(min), Ok(max)) = (caps[1].parse::<f64>(), caps[2].parse::<f64>()) else {
        return NEUTRAL_SALARY;
    };
    match (min + max) / 2.0 {
        avg if avg >= 15.0 => 95.0,
        avg if avg >= 10.0 => 85.0,
        avg if avg >= 7.0 => 75.0,
        _ => 60.0,
    }
}

/// One decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::tests::employer;
    use crate::matching::profile::ExperienceEntry;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn entries(n: usize) -> Experience {
        Experience::Entries(vec![ExperienceEntry::default(); n])
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        let sum = w.skill + w.culture + w.experience + w.location + w.salary;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_skill_match_two_of_six() {
        let skills = set(&["python", "react"]);
        let stack = strings(&["JavaScript", "React", "Node.js", "Python", "AWS", "MongoDB"]);
        assert_eq!(round1(skill_match(&skills, &stack)), 33.3);
    }

    #[test]
    fn test_skill_match_empty_sides_are_zero() {
        let stack = strings(&["Rust"]);
        assert_eq!(skill_match(&BTreeSet::new(), &stack), 0.0);
        assert_eq!(skill_match(&set(&["rust"]), &[]), 0.0);
    }

    #[test]
    fn test_skill_match_counts_each_stack_entry_once() {
        let skills = set(&["java", "javascript"]);
        let stack = strings(&["JavaScript"]);
        assert_eq!(skill_match(&skills, &stack), 100.0);
    }

    #[test]
    fn test_overlapping_entries_keeps_stack_order() {
        let skills = set(&["aws", "react"]);
        let stack = strings(&["React", "Go", "AWS"]);
        let hits: Vec<_> = overlapping_entries(&skills, &stack).collect();
        assert_eq!(hits, vec!["React", "AWS"]);
    }

    #[test]
    fn test_location_match() {
        let locations = strings(&["Bangalore", "Pune"]);
        assert_eq!(location_match("bangalore", &locations), 100.0);
        assert_eq!(location_match("Pune, Maharashtra", &locations), 100.0);
        assert_eq!(location_match("Delhi", &locations), 20.0);
        assert_eq!(location_match("", &locations), 50.0);
        assert_eq!(location_match("Delhi", &[]), 50.0);
    }

    #[test]
    fn test_experience_cascade() {
        let startup = employer("s", "Startup");
        let product = employer("p", "Product Company");
        let service = employer("v", "Service Company");
        let mut large = employer("l", "Conglomerate");
        large.size = "5000+".to_string();
        let other = employer("o", "Conglomerate");

        assert_eq!(experience_match(&entries(2), &startup), 90.0);
        assert_eq!(experience_match(&entries(3), &startup), 60.0);
        assert_eq!(experience_match(&entries(3), &product), 85.0);
        assert_eq!(experience_match(&entries(4), &product), 60.0);
        assert_eq!(experience_match(&entries(0), &service), 80.0);
        assert_eq!(experience_match(&entries(10), &service), 80.0);
        assert_eq!(experience_match(&entries(1), &large), 75.0);
        assert_eq!(experience_match(&entries(0), &large), 60.0);
        assert_eq!(experience_match(&entries(1), &other), 60.0);
    }

    #[test]
    fn test_experience_from_description() {
        let startup = employer("s", "Startup");
        let fresher = Experience::Description("2 years building APIs".into());
        let senior = Experience::Description("8 yrs of backend work".into());
        assert_eq!(experience_match(&fresher, &startup), 90.0);
        assert_eq!(experience_match(&senior, &startup), 60.0);
    }

    #[test]
    fn test_service_check_is_case_sensitive() {
        assert_eq!(experience_match(&entries(5), &employer("x", "it services")), 60.0);
    }

    #[test]
    fn test_culture_match() {
        let culture = strings(&["Innovation"]);
        let values = strings(&["Learning"]);
        assert_eq!(culture_match(&BTreeSet::new(), &culture, &values), 70.0);
        assert_eq!(culture_match(&set(&["golf"]), &culture, &values), 50.0);
        assert_eq!(culture_match(&set(&["innovation"]), &culture, &values), 70.0);
        assert_eq!(
            culture_match(&set(&["innovation", "learning"]), &culture, &values),
            80.0
        );
    }

    #[test]
    fn test_culture_match_caps_at_ninety() {
        let culture = strings(&["Innovation, Learning, Growth, Ownership, Scale"]);
        let interests = set(&["innovation", "learning", "growth", "ownership", "scale"]);
        assert_eq!(culture_match(&interests, &culture, &[]), 90.0);
    }

    #[test]
    fn test_salary_bands() {
        assert_eq!(salary_score("₹6-15 LPA"), 85.0);
        assert_eq!(salary_score("₹10-25 LPA"), 95.0);
        assert_eq!(salary_score("₹4-12 LPA"), 75.0);
        assert_eq!(salary_score("₹3-6 LPA"), 60.0);
        assert_eq!(salary_score("Competitive"), 50.0);
        assert_eq!(salary_score(""), 50.0);
    }

    #[test]
    fn test_overall_is_weighted_sum() {
        let scores = RawScores {
            skill_match: 100.0,
            location_match: 100.0,
            experience_match: 100.0,
            culture_match: 100.0,
            salary_score: 100.0,
        };
        assert!((scores.overall(&MatchWeights::default()) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.66), 66.7);
        assert_eq!(round1(85.0), 85.0);
    }
}
