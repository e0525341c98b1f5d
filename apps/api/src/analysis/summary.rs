//! Session aggregation: averages per-answer feedback into one session summary.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analysis::band::ScoreBand;
use crate::analysis::interview::ResponseFeedback;
use crate::errors::ScoringError;

const MAX_LISTED: usize = 5;
const WEAK_AREA_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub response_count: usize,
    pub average_overall: f64,
    pub average_content: f64,
    pub average_communication: f64,
    pub average_confidence: f64,
    /// First five distinct strengths, in first-seen order.
    pub strengths: Vec<String>,
    /// First five distinct improvements, in first-seen order.
    pub improvements: Vec<String>,
    pub performance: ScoreBand,
    pub recommendation: String,
    /// Sub-scores averaging below 60, as resource-table keys.
    pub weak_areas: Vec<String>,
}

/// Averages the stored scores of every response; calculators are not re-run.
///
/// Fails with `InvalidState` on an empty list instead of dividing by zero.
pub fn summarize_session(responses: &[ResponseFeedback]) -> Result<SessionSummary, ScoringError> {
    if responses.is_empty() {
        return Err(ScoringError::InvalidState(
            "no responses to summarize".to_string(),
        ));
    }

    let average_overall = mean_of(responses, |r| r.overall_score);
    let average_content = mean_of(responses, |r| r.content_score);
    let average_communication = mean_of(responses, |r| r.communication_score);
    let average_confidence = mean_of(responses, |r| r.confidence_score);

    let strengths = dedup_first_seen(responses.iter().flat_map(|r| r.strengths.iter()), MAX_LISTED);
    let improvements =
        dedup_first_seen(responses.iter().flat_map(|r| r.improvements.iter()), MAX_LISTED);

    let weak_areas = [
        ("content", average_content),
        ("communication", average_communication),
        ("confidence", average_confidence),
    ]
    .into_iter()
    .filter(|(_, avg)| *avg < WEAK_AREA_THRESHOLD)
    .map(|(area, _)| area.to_string())
    .collect();

    let performance = ScoreBand::from_score(average_overall);
    debug!(
        responses = responses.len(),
        average_overall,
        performance = performance.label(),
        "summarized interview session"
    );

    Ok(SessionSummary {
        response_count: responses.len(),
        average_overall,
        average_content,
        average_communication,
        average_confidence,
        strengths,
        improvements,
        performance,
        recommendation: performance.session_recommendation().to_string(),
        weak_areas,
    })
}

/// Mean of one stored sub-score across a non-empty response list, one decimal.
fn mean_of(responses: &[ResponseFeedback], score: impl Fn(&ResponseFeedback) -> i32) -> f64 {
    let total: i64 = responses.iter().map(|r| i64::from(score(r))).sum();
    round1(total as f64 / responses.len() as f64)
}

/// Order-preserving dedup: the first occurrence wins, then the list is truncated.
fn dedup_first_seen<'a>(items: impl Iterator<Item = &'a String>, limit: usize) -> Vec<String> {
    let mut seen: HashSet<&String> = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .take(limit)
        .cloned()
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
