//! Static keyword lexicons. Immutable reference data shared by every call.

use crate::analysis::context::{Branch, InterviewType};

// ────────────────────────────────────────────────────────────────────────────
// Interview answers
// ────────────────────────────────────────────────────────────────────────────

const HR_CONTENT: &[&str] = &[
    "experience",
    "team",
    "project",
    "challenge",
    "learn",
    "growth",
    "passion",
    "goal",
    "achievement",
    "collaboration",
    "leadership",
    "problem-solving",
    "dedication",
    "opportunity",
    "contribute",
];

const TECHNICAL_CONTENT: &[&str] = &[
    "algorithm",
    "data structure",
    "programming",
    "code",
    "development",
    "framework",
    "database",
    "api",
    "testing",
    "optimization",
    "design pattern",
    "architecture",
    "scalability",
    "performance",
    "debugging",
    "version control",
];

/// Discourse markers signalling a structured answer.
pub const STRUCTURE_MARKERS: &[&str] = &[
    "first",
    "second",
    "finally",
    "because",
    "however",
    "therefore",
    "for example",
];

pub const CONFIDENCE_BOOSTERS: &[&str] = &[
    "confident",
    "believe",
    "experienced",
    "skilled",
    "capable",
    "successful",
];

pub const UNCERTAINTY_PHRASES: &[&str] = &[
    "maybe",
    "perhaps",
    "not sure",
    "i think",
    "probably",
    "might",
];

/// Positive content lexicon for an interview type.
pub fn content_lexicon(kind: InterviewType) -> &'static [&'static str] {
    match kind {
        InterviewType::Hr => HR_CONTENT,
        InterviewType::Technical => TECHNICAL_CONTENT,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Résumés
// ────────────────────────────────────────────────────────────────────────────

pub const LINK_MARKERS: &[&str] = &["linkedin", "github", "portfolio", "http://", "https://"];

pub const EDUCATION_TERMS: &[&str] = &[
    "b.tech",
    "b.e",
    "bachelor",
    "master",
    "m.tech",
    "degree",
    "university",
    "college",
    "institute",
    "gpa",
    "cgpa",
    "percentage",
];

pub const EXPERIENCE_TERMS: &[&str] = &[
    "intern",
    "developed",
    "implemented",
    "worked",
    "managed",
    "led",
    "built",
    "designed",
    "responsible",
    "collaborated",
];

pub const PROJECT_TERMS: &[&str] = &[
    "project",
    "built",
    "developed",
    "created",
    "github",
    "application",
    "system",
];

pub const ACHIEVEMENT_TERMS: &[&str] = &[
    "award",
    "winner",
    "first place",
    "hackathon",
    "dean's list",
    "certification",
    "certified",
    "rank",
    "scholarship",
    "published",
];

/// Standard headings an applicant tracking system looks for.
pub const SECTION_HEADINGS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "achievements",
    "certifications",
    "summary",
    "objective",
];

const COMPUTER_SCIENCE_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "react",
    "node",
    "sql",
    "git",
    "data structures",
    "algorithms",
    "machine learning",
    "docker",
    "aws",
    "html",
    "css",
];

const INFORMATION_TECHNOLOGY_SKILLS: &[&str] = &[
    "networking",
    "linux",
    "sql",
    "python",
    "java",
    "cloud",
    "security",
    "javascript",
    "html",
    "css",
    "git",
    "aws",
    "database",
    "devops",
];

const ELECTRONICS_SKILLS: &[&str] = &[
    "embedded",
    "arduino",
    "verilog",
    "vhdl",
    "pcb",
    "microcontroller",
    "matlab",
    "circuit",
    "signal processing",
    "raspberry pi",
    "fpga",
];

const MECHANICAL_SKILLS: &[&str] = &[
    "autocad",
    "solidworks",
    "catia",
    "ansys",
    "matlab",
    "cad",
    "cam",
    "thermodynamics",
    "manufacturing",
    "cnc",
    "3d printing",
];

const ELECTRICAL_SKILLS: &[&str] = &[
    "matlab",
    "simulink",
    "power systems",
    "plc",
    "scada",
    "autocad",
    "control systems",
    "circuit",
    "electrical machines",
    "etap",
];

const CIVIL_SKILLS: &[&str] = &[
    "autocad",
    "staad",
    "revit",
    "etabs",
    "surveying",
    "structural analysis",
    "primavera",
    "gis",
    "construction",
    "concrete",
];

const GENERAL_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "python",
    "excel",
    "project management",
    "microsoft office",
];

/// Skill lexicon for a branch; `General` doubles as the fallback table.
pub fn skill_lexicon(branch: Branch) -> &'static [&'static str] {
    match branch {
        Branch::ComputerScience => COMPUTER_SCIENCE_SKILLS,
        Branch::InformationTechnology => INFORMATION_TECHNOLOGY_SKILLS,
        Branch::Electronics => ELECTRONICS_SKILLS,
        Branch::Mechanical => MECHANICAL_SKILLS,
        Branch::Electrical => ELECTRICAL_SKILLS,
        Branch::Civil => CIVIL_SKILLS,
        Branch::General => GENERAL_SKILLS,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Candidate profiles
// ────────────────────────────────────────────────────────────────────────────

/// Technologies picked out of free-text experience descriptions.
pub const TECH_KEYWORDS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node.js",
    "angular",
    "vue",
    "spring",
    "django",
    "flask",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "elasticsearch",
    "tensorflow",
    "pytorch",
    "machine learning",
    "ai",
    "blockchain",
    "devops",
    "ci/cd",
];

/// Interests inferred from a profile summary.
pub const INTEREST_KEYWORDS: &[&str] = &[
    "innovation",
    "technology",
    "ai",
    "startup",
    "learning",
    "growth",
    "leadership",
];
