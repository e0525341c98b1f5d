//! Feature extraction. Turns raw text plus a context tag into primitive,
//! countable signals. Pure and infallible: empty text yields zero-valued features.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::analysis::context::{Branch, InterviewType};
use crate::analysis::lexicons::{self, skill_lexicon};
use crate::analysis::text::Haystack;

/// Keyword-hit category names used as keys of `TextFeatures::keyword_hits`.
pub mod category {
    pub const CONTENT: &str = "content";
    pub const CONFIDENCE: &str = "confidence";
    pub const UNCERTAINTY: &str = "uncertainty";
    pub const EDUCATION: &str = "education";
    pub const EXPERIENCE: &str = "experience";
    pub const SKILLS: &str = "skills";
    pub const PROJECTS: &str = "projects";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const HEADINGS: &str = "headings";
}

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("Invalid email pattern"));

static PHONE_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\+?\d[\d \t().-]{8,}\d").expect("Invalid phone pattern"));

static QUANTIFIED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+(?:\.\d+)?\s*(?:%|x\b|\+|users|customers|clients|months|hours|lpa)")
        .expect("Invalid quantifier pattern")
});

/// Which lexicon set applies to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Interview(InterviewType),
    Resume(Branch),
}

/// Primitive features derived from one piece of text. Built fresh per call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextFeatures {
    pub word_count: usize,
    /// Characters after trimming surrounding whitespace.
    pub trimmed_len: usize,
    pub keyword_hits: BTreeMap<&'static str, usize>,
    /// Distinct discourse markers present.
    pub structure_hits: usize,
    pub has_email: bool,
    pub has_phone: bool,
    pub has_link: bool,
    pub has_quantified_outcome: bool,
    /// Lines starting with a bullet marker.
    pub bullet_lines: usize,
}

impl TextFeatures {
    /// Hit count for a category; absent categories count as zero.
    pub fn hits(&self, category: &str) -> usize {
        self.keyword_hits.get(category).copied().unwrap_or(0)
    }
}

/// Extracts primitive features from `text` using the lexicons selected by `context`.
pub fn extract(text: &str, context: Context) -> TextFeatures {
    let haystack = Haystack::new(text);
    let mut keyword_hits = BTreeMap::new();

    match context {
        Context::Interview(kind) => {
            keyword_hits.insert(
                category::CONTENT,
                haystack.count_hits(lexicons::content_lexicon(kind)),
            );
            keyword_hits.insert(
                category::CONFIDENCE,
                haystack.count_hits(lexicons::CONFIDENCE_BOOSTERS),
            );
            keyword_hits.insert(
                category::UNCERTAINTY,
                haystack.count_hits(lexicons::UNCERTAINTY_PHRASES),
            );
        }
        Context::Resume(branch) => {
            let sections: [(&'static str, &[&str]); 6] = [
                (category::EDUCATION, lexicons::EDUCATION_TERMS),
                (category::EXPERIENCE, lexicons::EXPERIENCE_TERMS),
                (category::SKILLS, skill_lexicon(branch)),
                (category::PROJECTS, lexicons::PROJECT_TERMS),
                (category::ACHIEVEMENTS, lexicons::ACHIEVEMENT_TERMS),
                (category::HEADINGS, lexicons::SECTION_HEADINGS),
            ];
            for (name, lexicon) in sections {
                keyword_hits.insert(name, haystack.count_hits(lexicon));
            }
        }
    }

    TextFeatures {
        word_count: text.split_whitespace().count(),
        trimmed_len: text.trim().chars().count(),
        keyword_hits,
        structure_hits: haystack.count_hits(lexicons::STRUCTURE_MARKERS),
        has_email: EMAIL.is_match(text),
        has_phone: has_phone_number(text),
        has_link: haystack.count_hits(lexicons::LINK_MARKERS) > 0,
        has_quantified_outcome: QUANTIFIED.is_match(haystack.as_str()),
        bullet_lines: text
            .lines()
            .filter(|line| line.trim_start().starts_with(['-', '•', '*', '–']))
            .count(),
    }
}

/// A run of at least ten digits on one line, allowing the usual separators.
fn has_phone_number(text: &str) -> bool {
    PHONE_CANDIDATE
        .find_iter(text)
        .any(|m| m.as_str().chars().filter(|c| c.is_ascii_digit()).count() >= 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_zero_features() {
        let f = extract("", Context::Interview(InterviewType::Hr));
        assert_eq!(f.word_count, 0);
        assert_eq!(f.trimmed_len, 0);
        assert_eq!(f.hits(category::CONTENT), 0);
        assert_eq!(f.structure_hits, 0);
        assert!(!f.has_email && !f.has_phone && !f.has_link);
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        let f = extract("one  two\tthree\nfour", Context::Interview(InterviewType::Hr));
        assert_eq!(f.word_count, 4);
    }

    #[test]
    fn test_interview_keyword_categories() {
        let f = extract(
            "I believe my team experience helps, but maybe not always.",
            Context::Interview(InterviewType::Hr),
        );
        assert_eq!(f.hits(category::CONTENT), 2, "team + experience");
        assert_eq!(f.hits(category::CONFIDENCE), 1, "believe");
        assert_eq!(f.hits(category::UNCERTAINTY), 1, "maybe");
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let f = extract("ALGORITHM and Database", Context::Interview(InterviewType::Technical));
        assert_eq!(f.hits(category::CONTENT), 2);
    }

    #[test]
    fn test_substring_quirk_is_preserved() {
        // "api" hides inside "capital"; the matcher is not word-boundary aware
        let f = extract("capital", Context::Interview(InterviewType::Technical));
        assert_eq!(f.hits(category::CONTENT), 1);
    }

    #[test]
    fn test_structure_markers_counted_once_each() {
        let f = extract(
            "First because because however",
            Context::Interview(InterviewType::Hr),
        );
        assert_eq!(f.structure_hits, 3);
    }

    #[test]
    fn test_presence_flags() {
        let f = extract(
            "Email: jane@example.com\nPhone: +91 98765 43210\nlinkedin.com/in/jane",
            Context::Resume(Branch::ComputerScience),
        );
        assert!(f.has_email);
        assert!(f.has_phone);
        assert!(f.has_link);
    }

    #[test]
    fn test_short_digit_runs_are_not_phones() {
        let f = extract("GPA 8.5/10 in 2023", Context::Resume(Branch::General));
        assert!(!f.has_phone);
    }

    #[test]
    fn test_year_ranges_on_adjacent_lines_are_not_a_phone() {
        let text = "EDUCATION\nB.Tech 2019 - 2023\n12th 2017 - 2019";
        let f = extract(text, Context::Resume(Branch::ComputerScience));
        assert!(!f.has_phone, "digits split across lines must not form a phone number");
    }

    #[test]
    fn test_resume_branch_selects_skill_lexicon() {
        let text = "Skills: AutoCAD, SolidWorks, ANSYS";
        let mech = extract(text, Context::Resume(Branch::Mechanical));
        let cs = extract(text, Context::Resume(Branch::ComputerScience));
        assert_eq!(mech.hits(category::SKILLS), 4, "autocad, solidworks, ansys, cad");
        assert_eq!(cs.hits(category::SKILLS), 0);
    }

    #[test]
    fn test_bullets_and_quantified_outcomes() {
        let f = extract(
            "EXPERIENCE\n- Cut latency by 40%\n• Served 500 users",
            Context::Resume(Branch::General),
        );
        assert_eq!(f.bullet_lines, 2);
        assert!(f.has_quantified_outcome);
    }
}
