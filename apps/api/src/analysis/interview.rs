//! Interview answer scoring.
//!
//! Three calculators (content, communication, confidence) each start from a fixed
//! base, add or subtract per matched signal, and are aggregated into one overall
//! score. Every reported score is clamped to [15, 95]. Answers shorter than ten
//! characters skip the calculators and receive fixed feedback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::band::ScoreBand;
use crate::analysis::context::InterviewType;
use crate::analysis::features::{category, extract, Context, TextFeatures};

const MIN_ANSWER_CHARS: usize = 10;
const SCORE_FLOOR: i32 = 15;
const SCORE_CEILING: i32 = 95;

const CONTENT_BASE: i32 = 50;
const COMMUNICATION_BASE: i32 = 60;
const CONFIDENCE_BASE: i32 = 55;
const STRUCTURE_BONUS: i32 = 5;
const BOOSTER_BONUS: i32 = 8;
const UNCERTAINTY_PENALTY: i32 = 5;

const STRENGTH_THRESHOLD: i32 = 70;
const IMPROVEMENT_THRESHOLD: i32 = 60;
const DETAILED_WORD_COUNT: usize = 50;
const BRIEF_WORD_COUNT: usize = 30;

/// Feedback for one submitted answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseFeedback {
    pub overall_score: i32,
    pub content_score: i32,
    pub communication_score: i32,
    pub confidence_score: i32,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detailed_feedback: String,
}

impl ResponseFeedback {
    /// Fixed feedback for empty or near-empty answers.
    pub fn too_brief() -> Self {
        Self {
            overall_score: 20,
            content_score: 10,
            communication_score: 20,
            confidence_score: 30,
            strengths: vec![],
            improvements: vec![
                "Elaborate more on your answer".to_string(),
                "Include specific examples".to_string(),
                "Show enthusiasm".to_string(),
            ],
            detailed_feedback: "Response too brief. Provide more detailed answers with examples."
                .to_string(),
        }
    }
}

/// Scores one interview answer.
pub fn analyze_response(answer: &str, kind: InterviewType) -> ResponseFeedback {
    let features = extract(answer, Context::Interview(kind));
    if features.trimmed_len < MIN_ANSWER_CHARS {
        debug!(interview_type = %kind, "answer below minimum length; returning fixed feedback");
        return ResponseFeedback::too_brief();
    }

    let content = content_score(&features, kind);
    let communication = communication_score(&features);
    let confidence = confidence_score(&features);
    let overall = clamp_score((f64::from(content + communication + confidence) / 3.0).round() as i32);

    debug!(
        interview_type = %kind,
        word_count = features.word_count,
        content,
        communication,
        confidence,
        overall,
        "scored interview answer"
    );

    let (strengths, improvements) =
        qualitative_feedback(content, communication, confidence, features.word_count);

    ResponseFeedback {
        overall_score: overall,
        content_score: clamp_score(content),
        communication_score: clamp_score(communication),
        confidence_score: clamp_score(confidence),
        strengths,
        improvements,
        // Banded on the reported overall rather than the unclamped mean, so a raw
        // 79.67 that reports as 80 reads "Excellent" and agrees with its score.
        detailed_feedback: ScoreBand::from_score(f64::from(overall))
            .answer_feedback()
            .to_string(),
    }
}

/// Base 50, plus a fixed bonus for every content keyword present.
/// Unclamped; the aggregate clamp bounds it.
pub fn content_score(features: &TextFeatures, kind: InterviewType) -> i32 {
    let per_hit = match kind {
        InterviewType::Hr => 5,
        InterviewType::Technical => 6,
    };
    CONTENT_BASE + per_hit * features.hits(category::CONTENT) as i32
}

/// Base 60, a word-count band bonus, and a one-off bonus for structured answers.
pub fn communication_score(features: &TextFeatures) -> i32 {
    let length_bonus = match features.word_count {
        50..=200 => 20,
        20..=49 => 10,
        n if n > 200 => 5,
        _ => 0,
    };
    let structure_bonus = if features.structure_hits > 0 {
        STRUCTURE_BONUS
    } else {
        0
    };
    COMMUNICATION_BASE + length_bonus + structure_bonus
}

/// Base 55, +8 per confidence booster, −5 per uncertainty phrase.
pub fn confidence_score(features: &TextFeatures) -> i32 {
    CONFIDENCE_BASE + BOOSTER_BONUS * features.hits(category::CONFIDENCE) as i32
        - UNCERTAINTY_PENALTY * features.hits(category::UNCERTAINTY) as i32
}

fn clamp_score(score: i32) -> i32 {
    SCORE_CEILING.min(SCORE_FLOOR.max(score))
}

/// Checks run in a fixed order (content, communication, confidence, length) on the
/// unclamped sub-scores.
fn qualitative_feedback(
    content: i32,
    communication: i32,
    confidence: i32,
    word_count: usize,
) -> (Vec<String>, Vec<String>) {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    if content >= STRENGTH_THRESHOLD {
        strengths.push("Strong domain knowledge demonstrated");
    }
    if communication >= STRENGTH_THRESHOLD {
        strengths.push("Clear and well-structured communication");
    }
    if confidence >= STRENGTH_THRESHOLD {
        strengths.push("Shows confidence and conviction");
    }
    if word_count >= DETAILED_WORD_COUNT {
        strengths.push("Detailed and comprehensive response");
    }

    if content < IMPROVEMENT_THRESHOLD {
        improvements.push("Include more specific examples and technical details");
    }
    if communication < IMPROVEMENT_THRESHOLD {
        improvements.push("Structure your response better with clear points");
    }
    if confidence < IMPROVEMENT_THRESHOLD {
        improvements.push("Express more confidence in your abilities");
    }
    if word_count < BRIEF_WORD_COUNT {
        improvements.push("Provide more elaborate answers");
    }

    (
        strengths.into_iter().map(String::from).collect(),
        improvements.into_iter().map(String::from).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HR_ANSWER: &str = "I am a passionate software developer with experience in Python and JavaScript. I have worked on several projects including web applications and machine learning models.";

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_empty_answer_returns_fixed_feedback() {
        let fb = analyze_response("", InterviewType::Hr);
        assert_eq!(
            (
                fb.overall_score,
                fb.content_score,
                fb.communication_score,
                fb.confidence_score
            ),
            (20, 10, 20, 30)
        );
        assert_eq!(
            fb.improvements,
            vec![
                "Elaborate more on your answer",
                "Include specific examples",
                "Show enthusiasm"
            ]
        );
        assert!(fb.strengths.is_empty());
    }

    #[test]
    fn test_nine_chars_after_trim_is_degenerate() {
        let fb = analyze_response("   too short   ", InterviewType::Technical);
        assert_eq!(fb, ResponseFeedback::too_brief());
        let fb = analyze_response("123456789", InterviewType::Technical);
        assert_eq!(fb, ResponseFeedback::too_brief());
    }

    #[test]
    fn test_ten_chars_is_scored() {
        let fb = analyze_response("1234567890", InterviewType::Hr);
        assert_ne!(fb, ResponseFeedback::too_brief());
    }

    #[test]
    fn test_sample_hr_answer() {
        let fb = analyze_response(SAMPLE_HR_ANSWER, InterviewType::Hr);
        // experience, project, passion, learn → 50 + 4×5
        assert_eq!(fb.content_score, 70);
        // 25 words, no markers
        assert_eq!(fb.communication_score, 70);
        assert_eq!(fb.confidence_score, 55);
        assert_eq!(fb.overall_score, 65);
        assert_eq!(
            fb.strengths,
            vec![
                "Strong domain knowledge demonstrated",
                "Clear and well-structured communication"
            ]
        );
        assert_eq!(
            fb.improvements,
            vec![
                "Express more confidence in your abilities",
                "Provide more elaborate answers"
            ]
        );
        assert!(fb.detailed_feedback.starts_with("Good response"));
    }

    #[test]
    fn test_technical_keywords_weigh_six() {
        let features = extract(
            "The algorithm uses a database index",
            Context::Interview(InterviewType::Technical),
        );
        assert_eq!(content_score(&features, InterviewType::Technical), 62);
    }

    #[test]
    fn test_keyword_heavy_answer_is_capped_at_95() {
        let answer = "algorithm data structure programming code development framework database api \
                      testing optimization design pattern architecture scalability performance \
                      debugging version control";
        let fb = analyze_response(answer, InterviewType::Technical);
        assert_eq!(fb.content_score, 95);
        assert!(fb.overall_score <= 95);
    }

    #[test]
    fn test_communication_word_count_bands() {
        let f = |n| extract(&words(n), Context::Interview(InterviewType::Hr));
        assert_eq!(communication_score(&f(10)), 60);
        assert_eq!(communication_score(&f(20)), 70);
        assert_eq!(communication_score(&f(49)), 70);
        assert_eq!(communication_score(&f(50)), 80);
        assert_eq!(communication_score(&f(200)), 80);
        assert_eq!(communication_score(&f(201)), 65);
    }

    #[test]
    fn test_structure_bonus_applies_once() {
        let one = extract("first of all", Context::Interview(InterviewType::Hr));
        let many = extract(
            "first, second, finally, because, however, therefore, for example",
            Context::Interview(InterviewType::Hr),
        );
        assert_eq!(communication_score(&one), 65);
        assert_eq!(communication_score(&many), 65);
    }

    #[test]
    fn test_raising_word_count_into_band_never_lowers_communication() {
        let short = format!("because {}", words(30));
        let long = format!("because {}", words(120));
        let short = analyze_response(&short, InterviewType::Hr);
        let long = analyze_response(&long, InterviewType::Hr);
        assert!(long.communication_score >= short.communication_score);
        assert_eq!(long.communication_score, 85);
    }

    #[test]
    fn test_confidence_boosters_and_uncertainty_accumulate() {
        let features = extract(
            "I am confident and skilled, but maybe I might be wrong, probably.",
            Context::Interview(InterviewType::Hr),
        );
        // 55 + 2×8 − 3×5
        assert_eq!(confidence_score(&features), 56);
    }

    #[test]
    fn test_all_scores_stay_within_bounds() {
        let answers = [
            "maybe perhaps not sure i think probably might".to_string(),
            words(500),
            "confident believe experienced skilled capable successful team goal".to_string(),
            SAMPLE_HR_ANSWER.to_string(),
        ];
        for answer in &answers {
            for kind in InterviewType::ALL {
                let fb = analyze_response(answer, kind);
                for score in [
                    fb.overall_score,
                    fb.content_score,
                    fb.communication_score,
                    fb.confidence_score,
                ] {
                    assert!((15..=95).contains(&score), "score {score} out of range");
                }
            }
        }
    }

    #[test]
    fn test_detailed_feedback_matches_overall_band() {
        let fb = analyze_response(&words(60), InterviewType::Hr);
        // content 50, communication 80, confidence 55 → 61.67 → 62
        assert_eq!(fb.overall_score, 62);
        assert!(fb.detailed_feedback.starts_with("Average response"));
    }
}
