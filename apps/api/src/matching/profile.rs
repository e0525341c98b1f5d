//! Candidate profiles, derived from free-form LinkedIn-like input.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::lexicons::{INTEREST_KEYWORDS, TECH_KEYWORDS};
use crate::analysis::text::Haystack;

static YEARS_MENTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:year|yr)").expect("Invalid years pattern"));

/// Raw profile payload as supplied by the caller. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkedInProfile {
    #[serde(default)]
    pub skills: Option<SkillList>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<Experience>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Skills arrive either as a list or as one comma-separated string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    List(Vec<String>),
    Csv(String),
}

impl SkillList {
    fn items(&self) -> Vec<&str> {
        match self {
            SkillList::List(items) => items.iter().map(String::as_str).collect(),
            SkillList::Csv(raw) => raw.split(',').collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Work history: structured entries or a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Entries(Vec<ExperienceEntry>),
    Description(String),
}

impl Default for Experience {
    fn default() -> Self {
        Experience::Entries(Vec::new())
    }
}

impl Experience {
    /// Years-of-experience proxy: the number of entries, or the largest
    /// "<N> year(s)" / "<N> yr(s)" mention in a description. Numbers are taken
    /// as written; values too large for `u32` are skipped.
    pub fn years(&self) -> u32 {
        match self {
            Experience::Entries(entries) => entries.len() as u32,
            Experience::Description(text) => YEARS_MENTION
                .captures_iter(&text.to_lowercase())
                .filter_map(|c| c[1].parse::<u32>().ok())
                .max()
                .unwrap_or(0),
        }
    }

    /// Entry count for structured history; descriptions count as zero.
    pub fn entry_count(&self) -> usize {
        match self {
            Experience::Entries(entries) => entries.len(),
            Experience::Description(_) => 0,
        }
    }
}

/// Normalised candidate profile used by the matcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CandidateProfile {
    /// Lowercase, trimmed, deduplicated.
    pub skills: BTreeSet<String>,
    pub location: String,
    pub experience: Experience,
    /// Lowercase, trimmed, deduplicated.
    pub interests: BTreeSet<String>,
}

impl CandidateProfile {
    pub fn new<S, I>(
        skills: impl IntoIterator<Item = S>,
        location: impl Into<String>,
        experience: Experience,
        interests: impl IntoIterator<Item = I>,
    ) -> Self
    where
        S: AsRef<str>,
        I: AsRef<str>,
    {
        Self {
            skills: normalize(skills),
            location: location.into().trim().to_string(),
            experience,
            interests: normalize(interests),
        }
    }

    /// Derives skills, location, experience and interests from raw profile input.
    ///
    /// Skills come from the explicit list, tech keywords found in experience
    /// descriptions, and project technologies. Interests come from the explicit
    /// list plus interest keywords found in the summary.
    pub fn from_linkedin(raw: &LinkedInProfile) -> Self {
        let mut skills: Vec<String> = raw
            .skills
            .as_ref()
            .map(|s| s.items().into_iter().map(String::from).collect())
            .unwrap_or_default();

        if let Some(Experience::Entries(entries)) = &raw.experience {
            for entry in entries {
                let description = Haystack::new(&entry.description);
                skills.extend(description.hits(TECH_KEYWORDS).into_iter().map(String::from));
            }
        }
        for project in raw.projects.iter().flatten() {
            skills.extend(project.technologies.iter().cloned());
        }

        let mut interests = raw.interests.clone().unwrap_or_default();
        if let Some(summary) = &raw.summary {
            let summary = Haystack::new(summary);
            interests.extend(summary.hits(INTEREST_KEYWORDS).into_iter().map(String::from));
        }

        Self::new(
            skills,
            raw.location.clone().unwrap_or_default(),
            raw.experience.clone().unwrap_or_default(),
            interests,
        )
    }
}

/// Lowercases and trims; blank entries are dropped since an empty string would
/// fuzzy-match everything.
fn normalize<S: AsRef<str>>(items: impl IntoIterator<Item = S>) -> BTreeSet<String> {
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
