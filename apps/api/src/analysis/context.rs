//! Closed enumerations that select which lexicon or resource table applies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ScoringError;

/// Kind of mock interview an answer was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewType {
    Hr,
    Technical,
}

impl InterviewType {
    pub const ALL: [InterviewType; 2] = [InterviewType::Hr, InterviewType::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Hr => "hr",
            InterviewType::Technical => "technical",
        }
    }
}

impl FromStr for InterviewType {
    type Err = ScoringError;

    /// Unknown types are rejected; the core never guesses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hr" => Ok(InterviewType::Hr),
            "technical" => Ok(InterviewType::Technical),
            other => Err(ScoringError::InvalidInput(format!(
                "unknown interview type '{other}' (expected 'hr' or 'technical')"
            ))),
        }
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engineering branch of the candidate. Unrecognised names resolve to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    #[serde(rename = "Information Technology")]
    InformationTechnology,
    Electronics,
    Mechanical,
    Electrical,
    Civil,
    #[default]
    General,
}

impl Branch {
    pub const KNOWN: [Branch; 6] = [
        Branch::ComputerScience,
        Branch::InformationTechnology,
        Branch::Electronics,
        Branch::Mechanical,
        Branch::Electrical,
        Branch::Civil,
    ];

    /// Resolves a free-text branch name. Matching is exact modulo case and
    /// surrounding whitespace; anything else falls back to `General`.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::KNOWN
            .into_iter()
            .find(|b| b.display_name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Branch::ComputerScience => "Computer Science",
            Branch::InformationTechnology => "Information Technology",
            Branch::Electronics => "Electronics",
            Branch::Mechanical => "Mechanical",
            Branch::Electrical => "Electrical",
            Branch::Civil => "Civil",
            Branch::General => "General",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
