//! Résumé analysis: seven independent section calculators over extracted plain text.
//!
//! The overall score is always the mean of the seven section scores, rounded to one
//! decimal. It is derived inside `ResumeAnalysis::from_sections` and never set directly.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::analysis::context::Branch;
use crate::analysis::features::{category, extract, Context, TextFeatures};

const MIN_RESUME_CHARS: usize = 100;
const DEGENERATE_SECTION_SCORE: u32 = 10;
const STRENGTH_THRESHOLD: u32 = 80;
const IMPROVEMENT_THRESHOLD: u32 = 50;

/// The seven fixed résumé sections, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    ContactInfo,
    Education,
    Experience,
    Skills,
    Projects,
    Achievements,
    Formatting,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::ContactInfo,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Formatting,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::ContactInfo => "contact_info",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Formatting => "formatting",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::ContactInfo => "Contact Information",
            Section::Education => "Education",
            Section::Experience => "Work Experience",
            Section::Skills => "Technical Skills",
            Section::Projects => "Projects",
            Section::Achievements => "Achievements & Certifications",
            Section::Formatting => "Formatting",
        }
    }

    /// Formatting is a property of the document, not something that can be left out.
    fn can_be_missing(&self) -> bool {
        !matches!(self, Section::Formatting)
    }

    fn strength(&self) -> &'static str {
        match self {
            Section::ContactInfo => "Complete and professional contact information",
            Section::Education => "Education details are clearly presented",
            Section::Experience => "Relevant experience with strong action verbs",
            Section::Skills => "Strong set of skills relevant to your branch",
            Section::Projects => "Well-described projects that show practical ability",
            Section::Achievements => "Notable achievements that set you apart",
            Section::Formatting => "Clean, ATS-friendly structure",
        }
    }

    fn improvement(&self) -> &'static str {
        match self {
            Section::ContactInfo => "Add a professional email, phone number and profile links",
            Section::Education => "List your degree, institution and CGPA or percentage",
            Section::Experience => "Describe internships or roles with action verbs and measurable results",
            Section::Skills => "Add more technical skills relevant to your branch",
            Section::Projects => "Add projects with the technologies used and your contribution",
            Section::Achievements => "Include certifications, hackathons, awards or scholarships",
            Section::Formatting => "Use standard section headings and bullet points for ATS compatibility",
        }
    }

    fn recommended_addition(&self) -> &'static str {
        match self {
            Section::ContactInfo => "Professional email address and phone number",
            Section::Education => "Degree, institution and CGPA/percentage",
            Section::Experience => "Internships or work experience with quantified impact",
            Section::Skills => "A dedicated technical skills section",
            Section::Projects => "2-3 projects with technologies used and repository links",
            Section::Achievements => "Certifications, hackathon results or academic awards",
            Section::Formatting => "Standard headings and bullet points",
        }
    }

    fn explanation(&self) -> &'static str {
        match self {
            Section::ContactInfo => {
                "Recruiters need an email address, a phone number and ideally a LinkedIn or GitHub link to reach you."
            }
            Section::Education => {
                "Mention your degree, branch, institution, graduation year and academic score."
            }
            Section::Experience => {
                "Internships and roles are weighed by action verbs and measurable outcomes such as percentages or user counts."
            }
            Section::Skills => {
                "Skills are matched against the tools and technologies expected for your engineering branch."
            }
            Section::Projects => {
                "Projects show applied ability; name the problem, the technologies and your contribution."
            }
            Section::Achievements => {
                "Awards, certifications, hackathons and scholarships differentiate otherwise similar candidates."
            }
            Section::Formatting => {
                "Applicant tracking systems parse standard headings, bullet points and a moderate length (roughly 200-800 words) most reliably."
            }
        }
    }
}

/// Per-section scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionScores {
    pub contact_info: u32,
    pub education: u32,
    pub experience: u32,
    pub skills: u32,
    pub projects: u32,
    pub achievements: u32,
    pub formatting: u32,
}

impl SectionScores {
    pub fn uniform(score: u32) -> Self {
        Self {
            contact_info: score,
            education: score,
            experience: score,
            skills: score,
            projects: score,
            achievements: score,
            formatting: score,
        }
    }

    pub fn get(&self, section: Section) -> u32 {
        match section {
            Section::ContactInfo => self.contact_info,
            Section::Education => self.education,
            Section::Experience => self.experience,
            Section::Skills => self.skills,
            Section::Projects => self.projects,
            Section::Achievements => self.achievements,
            Section::Formatting => self.formatting,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, u32)> + '_ {
        Section::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Arithmetic mean of exactly seven section scores.
    pub fn mean(&self) -> f64 {
        let total: u32 = self.iter().map(|(_, score)| score).sum();
        f64::from(total) / Section::ALL.len() as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeAnalysis {
    /// Mean of `section_scores`, one decimal.
    pub overall_score: f64,
    pub section_scores: SectionScores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub missing_sections: Vec<String>,
    pub recommended_additions: Vec<String>,
    pub detailed_feedback: BTreeMap<&'static str, &'static str>,
    /// Same value as the formatting section score.
    pub ats_score: u32,
}

impl ResumeAnalysis {
    pub fn from_sections(
        section_scores: SectionScores,
        strengths: Vec<String>,
        improvements: Vec<String>,
        missing_sections: Vec<String>,
        recommended_additions: Vec<String>,
    ) -> Self {
        Self {
            overall_score: round1(section_scores.mean()),
            section_scores,
            strengths,
            improvements,
            missing_sections,
            recommended_additions,
            detailed_feedback: Section::ALL
                .iter()
                .map(|s| (s.key(), s.explanation()))
                .collect(),
            ats_score: section_scores.formatting,
        }
    }

    /// Fixed analysis for text too short to evaluate section by section.
    fn too_short() -> Self {
        let content_sections = Section::ALL.iter().filter(|s| s.can_be_missing());
        Self::from_sections(
            SectionScores::uniform(DEGENERATE_SECTION_SCORE),
            vec![],
            vec!["Resume content is too short to evaluate. Add complete sections with details."
                .to_string()],
            content_sections.clone().map(|s| s.title().to_string()).collect(),
            content_sections
                .map(|s| s.recommended_addition().to_string())
                .collect(),
        )
    }
}

/// Analyses extracted résumé text. Unknown branches use the general skill lexicon.
pub fn analyze_resume(text: &str, branch: Branch) -> ResumeAnalysis {
    let features = extract(text, Context::Resume(branch));
    if features.trimmed_len < MIN_RESUME_CHARS {
        debug!(%branch, chars = features.trimmed_len, "resume too short; returning fixed analysis");
        return ResumeAnalysis::too_short();
    }

    let scores = SectionScores {
        contact_info: contact_info_score(&features),
        education: education_score(&features),
        experience: experience_score(&features),
        skills: skills_score(&features),
        projects: projects_score(&features),
        achievements: achievements_score(&features),
        formatting: formatting_score(&features),
    };

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    let mut missing_sections = Vec::new();
    let mut recommended_additions = Vec::new();

    for (section, score) in scores.iter() {
        if score >= STRENGTH_THRESHOLD {
            strengths.push(section.strength().to_string());
        } else if score < IMPROVEMENT_THRESHOLD {
            improvements.push(section.improvement().to_string());
            if section.can_be_missing() && !section_signal_present(section, &features) {
                missing_sections.push(section.title().to_string());
                recommended_additions.push(section.recommended_addition().to_string());
            }
        }
    }

    if !features.has_link {
        recommended_additions.push("LinkedIn or GitHub profile link".to_string());
    }
    if !features.has_quantified_outcome {
        recommended_additions.push("Quantified achievements (numbers, percentages, scale)".to_string());
    }

    let analysis = ResumeAnalysis::from_sections(
        scores,
        strengths,
        improvements,
        missing_sections,
        recommended_additions,
    );
    debug!(
        %branch,
        overall = analysis.overall_score,
        missing = analysis.missing_sections.len(),
        "scored resume"
    );
    analysis
}

fn section_signal_present(section: Section, f: &TextFeatures) -> bool {
    match section {
        Section::ContactInfo => f.has_email || f.has_phone,
        Section::Education => f.hits(category::EDUCATION) > 0,
        Section::Experience => f.hits(category::EXPERIENCE) > 0,
        Section::Skills => f.hits(category::SKILLS) > 0,
        Section::Projects => f.hits(category::PROJECTS) > 0,
        Section::Achievements => f.hits(category::ACHIEVEMENTS) > 0,
        Section::Formatting => true,
    }
}

/// 20 base, +30 email, +25 phone, +25 profile link.
pub fn contact_info_score(f: &TextFeatures) -> u32 {
    let mut score = 20;
    if f.has_email {
        score += 30;
    }
    if f.has_phone {
        score += 25;
    }
    if f.has_link {
        score += 25;
    }
    score
}

pub fn education_score(f: &TextFeatures) -> u32 {
    cap(30 + 10 * f.hits(category::EDUCATION) as u32)
}

/// 20 base, +8 per action term, +10 when an outcome is quantified.
pub fn experience_score(f: &TextFeatures) -> u32 {
    let quantified = if f.has_quantified_outcome { 10 } else { 0 };
    cap(20 + 8 * f.hits(category::EXPERIENCE) as u32 + quantified)
}

pub fn skills_score(f: &TextFeatures) -> u32 {
    cap(30 + 5 * f.hits(category::SKILLS) as u32)
}

pub fn projects_score(f: &TextFeatures) -> u32 {
    cap(25 + 10 * f.hits(category::PROJECTS) as u32)
}

pub fn achievements_score(f: &TextFeatures) -> u32 {
    cap(20 + 10 * f.hits(category::ACHIEVEMENTS) as u32)
}

/// ATS friendliness: length band, standard headings, bullet usage.
pub fn formatting_score(f: &TextFeatures) -> u32 {
    let length: i64 = match f.word_count {
        200..=800 => 20,
        100..=199 => 10,
        n if n > 1000 => -10,
        _ => 0,
    };
    let headings = 5 * f.hits(category::HEADINGS) as i64;
    let bullets = if f.bullet_lines > 0 { 10 } else { 0 };
    (50 + length + headings + bullets).clamp(0, 100) as u32
}

fn cap(score: u32) -> u32 {
    score.min(100)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESUME: &str = "John Doe
Email: johndoe@example.com
Phone: 1234567890
LinkedIn: linkedin.com/in/johndoe

EDUCATION
B.Tech in Computer Science
Test Engineering College
GPA: 8.5/10

EXPERIENCE
Software Development Intern
Tech Company | 3 months
- Developed web applications using React and Node.js
- Implemented RESTful APIs

SKILLS
Python, JavaScript, React, Node.js, MongoDB, SQL

PROJECTS
- E-commerce Platform: Built a full-stack application
- Machine Learning Model: Developed a prediction model

ACHIEVEMENTS
- Dean's List for Academic Excellence
- First place in College Hackathon
";

    #[test]
    fn test_sample_resume_section_scores() {
        let a = analyze_resume(SAMPLE_RESUME, Branch::ComputerScience);
        let s = a.section_scores;
        assert_eq!(s.contact_info, 100);
        assert_eq!(s.education, 60, "b.tech, college, gpa");
        assert_eq!(s.experience, 62, "4 action terms + quantified");
        assert_eq!(s.skills, 65, "7 computer science skills");
        assert_eq!(s.projects, 65);
        assert_eq!(s.achievements, 50);
        assert_eq!(s.formatting, 85, "5 headings + bullets, 75 words");
        assert_eq!(a.overall_score, 69.6);
        assert_eq!(a.ats_score, s.formatting);
        assert!(a.missing_sections.is_empty());
    }

    #[test]
    fn test_year_ranges_earn_no_phone_credit() {
        let f = extract(
            "EDUCATION\nB.Tech 2019 - 2023\n12th 2017 - 2019",
            Context::Resume(Branch::ComputerScience),
        );
        assert_eq!(contact_info_score(&f), 20);
    }

    #[test]
    fn test_sample_resume_strengths() {
        let a = analyze_resume(SAMPLE_RESUME, Branch::ComputerScience);
        assert_eq!(
            a.strengths,
            vec![
                Section::ContactInfo.strength().to_string(),
                Section::Formatting.strength().to_string()
            ]
        );
        assert!(a.improvements.is_empty());
    }

    #[test]
    fn test_overall_is_mean_of_seven_sections() {
        let a = analyze_resume(SAMPLE_RESUME, Branch::Civil);
        let mean = a.section_scores.mean();
        assert!((a.overall_score - mean).abs() <= 0.05);
    }

    #[test]
    fn test_changing_one_section_moves_mean_by_one_seventh() {
        let base = SectionScores::uniform(50);
        let mut bumped = base;
        bumped.skills += 14;
        assert!((bumped.mean() - base.mean() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_text_short_circuits() {
        let a = analyze_resume("John Doe, python developer", Branch::ComputerScience);
        assert_eq!(a.overall_score, 10.0);
        assert_eq!(a.section_scores, SectionScores::uniform(10));
        assert_eq!(a.missing_sections.len(), 6);
        assert!(!a.missing_sections.contains(&"Formatting".to_string()));
        assert_eq!(a.detailed_feedback.len(), 7);
    }

    #[test]
    fn test_empty_text_short_circuits() {
        let a = analyze_resume("", Branch::General);
        assert_eq!(a.overall_score, 10.0);
    }

    #[test]
    fn test_missing_sections_detected() {
        let text = "Jane Roe, jane@example.com. I am a motivated engineer who enjoys solving \
                    problems, learning new tools every day and working with people from \
                    many different backgrounds.";
        let a = analyze_resume(text, Branch::Mechanical);
        assert!(a.missing_sections.contains(&"Education".to_string()));
        assert!(a.missing_sections.contains(&"Projects".to_string()));
        assert!(!a.missing_sections.contains(&"Contact Information".to_string()));
        assert!(a
            .recommended_additions
            .contains(&"LinkedIn or GitHub profile link".to_string()));
    }

    #[test]
    fn test_unknown_branch_uses_general_lexicon() {
        let text = format!("{SAMPLE_RESUME}\nLeadership, teamwork, communication, Excel");
        let general = analyze_resume(&text, Branch::from_name("Biotechnology"));
        // python, communication, teamwork, leadership, excel
        assert_eq!(general.section_scores.skills, 55);
    }

    #[test]
    fn test_section_scores_are_bounded() {
        let stuffed = format!(
            "{SAMPLE_RESUME}\n{}",
            "award winner first place hackathon dean's list certification certified rank \
             scholarship published b.e bachelor master m.tech degree university institute cgpa \
             percentage "
                .repeat(3)
        );
        let a = analyze_resume(&stuffed, Branch::ComputerScience);
        for (section, score) in a.section_scores.iter() {
            assert!(score <= 100, "{} scored {score}", section.key());
        }
        assert_eq!(a.section_scores.achievements, 100);
        assert_eq!(a.section_scores.education, 100);
    }

    #[test]
    fn test_section_scores_serialize_as_named_map() {
        let json = serde_json::to_value(SectionScores::uniform(40)).unwrap();
        for section in Section::ALL {
            assert_eq!(json[section.key()], 40);
        }
    }
}
