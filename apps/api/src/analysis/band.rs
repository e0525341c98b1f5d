use serde::{Deserialize, Serialize};

/// Four non-overlapping score bands covering the whole score range.
/// Each lower bound is inclusive: exactly 80 is `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => ScoreBand::Excellent,
            s if s >= 65.0 => ScoreBand::Good,
            s if s >= 50.0 => ScoreBand::Average,
            _ => ScoreBand::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Average => "Average",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }

    /// Feedback sentence for a single interview answer.
    pub fn answer_feedback(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Excellent response! You demonstrated strong knowledge and communication skills."
            }
            ScoreBand::Good => {
                "Good response with room for improvement. Focus on the areas mentioned below."
            }
            ScoreBand::Average => {
                "Average response. Work on providing more detailed and confident answers."
            }
            ScoreBand::NeedsImprovement => {
                "Response needs significant improvement. Practice more structured and detailed answers."
            }
        }
    }

    /// Recommendation attached to a whole interview session.
    pub fn session_recommendation(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => {
                "Outstanding performance. You are ready for real interviews; keep your answers sharp with occasional practice."
            }
            ScoreBand::Good => {
                "Solid performance. Polish the areas listed below and practise a few more mock sessions."
            }
            ScoreBand::Average => {
                "Fair performance. Work on structuring your answers and backing them with concrete examples."
            }
            ScoreBand::NeedsImprovement => {
                "Keep practising. Focus on the fundamentals, answer in more detail, and review the recommended resources."
            }
        }
    }
}
