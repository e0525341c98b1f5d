//! Ranking the employer catalog against one candidate.
//!
//! `AppState` holds an `Arc<dyn CompatibilityScorer>`; `HeuristicMatcher` is the
//! default backend.

use serde::Serialize;
use tracing::debug;

use crate::matching::catalog::{Catalog, EmployerKind, EmployerProfile};
use crate::matching::profile::CandidateProfile;
use crate::matching::scoring::{overlapping_entries, round1, MatchWeights, RawScores};

const SKILL_EXPLANATION_THRESHOLD: f64 = 70.0;
const CULTURE_EXPLANATION_THRESHOLD: f64 = 75.0;
const LOCATION_EXPLANATION_THRESHOLD: f64 = 80.0;
const EXPLAINED_SKILLS: usize = 3;
const RECOMMENDED_ROLES: usize = 3;
const TOP_MATCHES: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Sub-scores and overall, each rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchScore {
    pub overall: f64,
    pub skill_match: f64,
    pub culture_match: f64,
    pub location_match: f64,
    pub experience_match: f64,
    pub salary_score: f64,
}

impl MatchScore {
    /// The overall is computed from the unrounded sub-scores, then rounded.
    pub fn from_raw(raw: &RawScores, weights: &MatchWeights) -> Self {
        Self {
            overall: round1(raw.overall(weights)),
            skill_match: round1(raw.skill_match),
            culture_match: round1(raw.culture_match),
            location_match: round1(raw.location_match),
            experience_match: round1(raw.experience_match),
            salary_score: round1(raw.salary_score),
        }
    }
}

/// One scored employer. Borrows the catalog record; computed fields live only here.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    #[serde(flatten)]
    pub employer: &'a EmployerProfile,
    pub match_score: MatchScore,
    pub match_explanations: Vec<String>,
    pub matching_skills: Vec<String>,
    pub recommended_roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub skills: Vec<String>,
    pub location: String,
    pub experience_count: usize,
    pub interests: Vec<String>,
}

impl From<&CandidateProfile> for ProfileSummary {
    fn from(candidate: &CandidateProfile) -> Self {
        Self {
            skills: candidate.skills.iter().cloned().collect(),
            location: candidate.location.clone(),
            experience_count: candidate.experience.entry_count(),
            interests: candidate.interests.iter().cloned().collect(),
        }
    }
}

/// Full response for a match request.
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport<'a> {
    pub user_profile_summary: ProfileSummary,
    pub matched_employers: Vec<MatchResult<'a>>,
    pub total_matches: usize,
    pub top_matches: Vec<MatchResult<'a>>,
}

impl<'a> MatchReport<'a> {
    pub fn new(candidate: &CandidateProfile, ranked: Vec<MatchResult<'a>>) -> Self {
        Self {
            user_profile_summary: ProfileSummary::from(candidate),
            total_matches: ranked.len(),
            top_matches: ranked.iter().take(TOP_MATCHES).cloned().collect(),
            matched_employers: ranked,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores every catalog entry against a candidate and returns them best-first.
///
/// Implementations must score the whole catalog (no filtering) and break ties
/// by catalog order.
pub trait CompatibilityScorer: Send + Sync {
    fn rank<'a>(&self, candidate: &CandidateProfile, catalog: &'a Catalog) -> Vec<MatchResult<'a>>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicMatcher
// ────────────────────────────────────────────────────────────────────────────

/// Weighted linear combination of the five per-dimension heuristics.
#[derive(Debug, Clone, Default)]
pub struct HeuristicMatcher {
    pub weights: MatchWeights,
}

impl HeuristicMatcher {
    pub fn score<'a>(
        &self,
        candidate: &CandidateProfile,
        employer: &'a EmployerProfile,
    ) -> MatchResult<'a> {
        let raw = RawScores::compute(candidate, employer);
        let match_score = MatchScore::from_raw(&raw, &self.weights);
        let matching_skills: Vec<String> =
            overlapping_entries(&candidate.skills, &employer.tech_stack)
                .cloned()
                .collect();

        MatchResult {
            employer,
            match_explanations: explain(&match_score, &matching_skills, employer),
            match_score,
            matching_skills,
            recommended_roles: employer
                .growth_opportunities
                .iter()
                .take(RECOMMENDED_ROLES)
                .cloned()
                .collect(),
        }
    }
}

impl CompatibilityScorer for HeuristicMatcher {
    fn rank<'a>(&self, candidate: &CandidateProfile, catalog: &'a Catalog) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> =
            catalog.iter().map(|e| self.score(candidate, e)).collect();
        // sort_by is stable: equal overalls keep catalog order.
        results.sort_by(|a, b| b.match_score.overall.total_cmp(&a.match_score.overall));

        debug!(
            employers = results.len(),
            best = results.first().map(|r| r.employer.id.as_str()),
            "ranked employer catalog"
        );
        results
    }
}

/// Canned sentences in fixed order: skill, culture, location, employer type.
/// Thresholds are checked against the rounded sub-scores.
fn explain(score: &MatchScore, matching_skills: &[String], employer: &EmployerProfile) -> Vec<String> {
    let mut explanations = Vec::new();

    if score.skill_match >= SKILL_EXPLANATION_THRESHOLD && !matching_skills.is_empty() {
        let shown: Vec<&str> = matching_skills
            .iter()
            .take(EXPLAINED_SKILLS)
            .map(String::as_str)
            .collect();
        explanations.push(format!("Strong technical match with {}", shown.join(", ")));
    }
    if score.culture_match >= CULTURE_EXPLANATION_THRESHOLD {
        explanations.push("Great cultural alignment with company values".to_string());
    }
    if score.location_match >= LOCATION_EXPLANATION_THRESHOLD {
        explanations.push("Located in your preferred area".to_string());
    }
    match employer.classification() {
        EmployerKind::Startup => explanations.push("Fast-growing startup environment".to_string()),
        EmployerKind::Product => explanations
            .push("Product-focused company with innovation opportunities".to_string()),
        EmployerKind::Service | EmployerKind::Other => {}
    }

    explanations
}
