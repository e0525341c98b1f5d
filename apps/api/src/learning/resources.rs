//! Curated video resources. Static data; every lookup is by exact key.

use serde::Serialize;

use crate::analysis::context::Branch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Channel,
    Playlist,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
    pub kind: ResourceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<&'static str>,
}

const fn channel(title: &'static str, url: &'static str) -> Resource {
    Resource {
        title,
        url,
        kind: ResourceKind::Channel,
        duration: None,
    }
}

const fn playlist(title: &'static str, url: &'static str) -> Resource {
    Resource {
        title,
        url,
        kind: ResourceKind::Playlist,
        duration: None,
    }
}

const fn video(title: &'static str, url: &'static str, duration: &'static str) -> Resource {
    Resource {
        title,
        url,
        kind: ResourceKind::Video,
        duration: Some(duration),
    }
}

/// Channels and playlists for one engineering branch.
pub struct BranchResources {
    pub channels: &'static [Resource],
    pub playlists: &'static [Resource],
}

// ────────────────────────────────────────────────────────────────────────────
// Branch tables
// ────────────────────────────────────────────────────────────────────────────

const COMPUTER_SCIENCE: BranchResources = BranchResources {
    channels: &[
        channel("freeCodeCamp.org", "https://www.youtube.com/c/Freecodecamp"),
        channel("Traversy Media", "https://www.youtube.com/c/TraversyMedia"),
        channel("The Net Ninja", "https://www.youtube.com/c/TheNetNinja"),
        channel("Coding Interview Pro", "https://www.youtube.com/c/CodingInterviewPro"),
    ],
    playlists: &[
        playlist(
            "Data Structures and Algorithms",
            "https://www.youtube.com/playlist?list=PLgUwDviBIf0p4ozDR_kJJkONnb1wdx2Ma",
        ),
        playlist(
            "System Design Interview",
            "https://www.youtube.com/playlist?list=PLMCXHnjXnTnvo6alSjVkgxV-VH6EPyvoX",
        ),
        playlist(
            "React.js Complete Course",
            "https://www.youtube.com/watch?v=w7ejDZ8SWv8",
        ),
    ],
};

const INFORMATION_TECHNOLOGY: BranchResources = BranchResources {
    channels: &[
        channel("NetworkChuck", "https://www.youtube.com/c/NetworkChuck"),
        channel("Professor Messer", "https://www.youtube.com/c/professormesser"),
        channel(
            "PowerCert Animated Videos",
            "https://www.youtube.com/c/PowerCertAnimatedVideos",
        ),
    ],
    playlists: &[
        playlist(
            "CompTIA Network+ Course",
            "https://www.youtube.com/playlist?list=PLG49S3nxzAnmpdmX7RoTOyuNJQAb-r-gd",
        ),
        playlist(
            "Cybersecurity Fundamentals",
            "https://www.youtube.com/playlist?list=PLhfrWIlLOoKOc7f8weL0lJneygGF_C0Jf",
        ),
    ],
};

const ELECTRONICS: BranchResources = BranchResources {
    channels: &[
        channel("EEVblog", "https://www.youtube.com/c/EevblogDave"),
        channel("GreatScott!", "https://www.youtube.com/c/greatscottlab"),
        channel("ElectroBOOM", "https://www.youtube.com/c/Electroboom"),
    ],
    playlists: &[
        playlist(
            "Arduino Tutorial Series",
            "https://www.youtube.com/playlist?list=PLGs0VKk2DiYw-L-RibttcvK-WBZm8WLEP",
        ),
        playlist(
            "PCB Design Basics",
            "https://www.youtube.com/playlist?list=PLXSyc11qLa1YhVCZ5Skxrf8CehnKT_2SV",
        ),
    ],
};

const MECHANICAL: BranchResources = BranchResources {
    channels: &[
        channel("SolidWorks", "https://www.youtube.com/c/SolidWorksOfficial"),
        channel("TITANS of CNC", "https://www.youtube.com/c/TITANSofCNC"),
        channel("Learn Engineering", "https://www.youtube.com/c/LearnEngineering"),
    ],
    playlists: &[
        playlist(
            "SolidWorks Tutorials",
            "https://www.youtube.com/playlist?list=PLym8blx7B-xPgW9mKE2FWW_pI0SX-J8-j",
        ),
        playlist(
            "Manufacturing Processes",
            "https://www.youtube.com/playlist?list=PLuUdFsbOK_8pKOD8_xxjPN8eFJODNXBFV",
        ),
    ],
};

const ELECTRICAL: BranchResources = BranchResources {
    channels: &[
        channel(
            "ElectricalEngineeringXYZ",
            "https://www.youtube.com/c/ElectricalEngineeringXYZ",
        ),
        channel(
            "ALL ABOUT ELECTRONICS",
            "https://www.youtube.com/c/ALLABOUTELECTRONICS",
        ),
        channel(
            "Power System Lectures",
            "https://www.youtube.com/c/PowerSystemLectures",
        ),
    ],
    playlists: &[
        playlist(
            "Power Systems Analysis",
            "https://www.youtube.com/playlist?list=PLgMDNELGJ1CaXVfvR3n2CU41pKP8kxPKY",
        ),
        playlist(
            "Control Systems",
            "https://www.youtube.com/playlist?list=PLUMWjy5jgHK1NC52DXXrriwihVrYZKqjk",
        ),
    ],
};

const CIVIL: BranchResources = BranchResources {
    channels: &[
        channel("Civil Engineering X", "https://www.youtube.com/c/CivilEngineeringX"),
        channel("The Constructor", "https://www.youtube.com/c/TheConstructor"),
        channel("STAAD Pro Learning", "https://www.youtube.com/c/STAADProLearning"),
    ],
    playlists: &[
        playlist(
            "Structural Engineering",
            "https://www.youtube.com/playlist?list=PLOAuB8dR35oeF_DRSB-wVbbFXHVq-oOL-",
        ),
        playlist(
            "AutoCAD Civil 3D",
            "https://www.youtube.com/playlist?list=PLgMDNELGJ1CZe9XLpCgDMj_lVi7p5ACBh",
        ),
    ],
};

/// `None` for `General`: only named branches have curated channels.
pub fn branch_resources(branch: Branch) -> Option<&'static BranchResources> {
    match branch {
        Branch::ComputerScience => Some(&COMPUTER_SCIENCE),
        Branch::InformationTechnology => Some(&INFORMATION_TECHNOLOGY),
        Branch::Electronics => Some(&ELECTRONICS),
        Branch::Mechanical => Some(&MECHANICAL),
        Branch::Electrical => Some(&ELECTRICAL),
        Branch::Civil => Some(&CIVIL),
        Branch::General => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skill and interview tables
// ────────────────────────────────────────────────────────────────────────────

const PYTHON: &[Resource] = &[
    video(
        "Python Programming Tutorial",
        "https://www.youtube.com/watch?v=_uQrJ0TkZlc",
        "6 hours",
    ),
    video(
        "Python Projects for Beginners",
        "https://www.youtube.com/watch?v=8ext9G7xspg",
        "5 hours",
    ),
];

const JAVASCRIPT: &[Resource] = &[
    video(
        "JavaScript Crash Course",
        "https://www.youtube.com/watch?v=hdI2bqOjy3c",
        "1.5 hours",
    ),
    video(
        "JavaScript Projects",
        "https://www.youtube.com/watch?v=3PHXvlpOkf4",
        "8 hours",
    ),
];

const REACT: &[Resource] = &[
    video(
        "React Course for Beginners",
        "https://www.youtube.com/watch?v=bMknfKXIFA8",
        "5 hours",
    ),
    video(
        "React Projects Tutorial",
        "https://www.youtube.com/watch?v=a_7Z7C_JCyo",
        "12 hours",
    ),
];

const MACHINE_LEARNING: &[Resource] = &[
    video(
        "Machine Learning Course",
        "https://www.youtube.com/watch?v=NWONeJKn6kc",
        "20 hours",
    ),
    video(
        "Python for Machine Learning",
        "https://www.youtube.com/watch?v=7eh4d6sabA0",
        "4 hours",
    ),
];

const SOFTWARE_INTERVIEW_PREP: Resource = video(
    "Software Engineering Interview Prep",
    "https://www.youtube.com/watch?v=KdXAUst8bdo",
    "2 hours",
);
const HR_INTERVIEW_PREP: Resource = video(
    "HR Interview Questions and Answers",
    "https://www.youtube.com/watch?v=naIkpQ_cIt0",
    "1 hour",
);
const SYSTEM_DESIGN_PREP: Resource = video(
    "System Design Interview Questions",
    "https://www.youtube.com/watch?v=UzLMhqg3_Wc",
    "3 hours",
);

pub const INTERVIEW_PREP: &[Resource] =
    &[SOFTWARE_INTERVIEW_PREP, HR_INTERVIEW_PREP, SYSTEM_DESIGN_PREP];

const CONTENT_AREA: &[Resource] = &[SOFTWARE_INTERVIEW_PREP, SYSTEM_DESIGN_PREP];
const DELIVERY_AREA: &[Resource] = &[HR_INTERVIEW_PREP];

/// Exact-key lookup. Keys are lowercase; "machine learning" keeps its space.
pub fn skill_resources(key: &str) -> Option<&'static [Resource]> {
    match key {
        "python" => Some(PYTHON),
        "javascript" => Some(JAVASCRIPT),
        "react" => Some(REACT),
        "machine learning" => Some(MACHINE_LEARNING),
        _ => None,
    }
}

/// Interview sub-score areas, as reported in a session summary's weak areas.
pub fn interview_area_resources(key: &str) -> Option<&'static [Resource]> {
    match key {
        "content" => Some(CONTENT_AREA),
        "communication" | "confidence" => Some(DELIVERY_AREA),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_branch_has_two_channels_and_two_playlists() {
        for branch in Branch::KNOWN {
            let resources = branch_resources(branch).unwrap();
            assert!(resources.channels.len() >= 2, "{branch} channels");
            assert!(resources.playlists.len() >= 2, "{branch} playlists");
        }
        assert!(branch_resources(Branch::General).is_none());
    }

    #[test]
    fn test_skill_lookup_is_exact() {
        assert!(skill_resources("python").is_some());
        assert!(skill_resources("Python").is_none());
        assert!(skill_resources("py").is_none());
        assert!(skill_resources("machine learning").is_some());
    }

    #[test]
    fn test_interview_prep_is_constant() {
        assert_eq!(INTERVIEW_PREP.len(), 3);
        assert!(INTERVIEW_PREP.iter().all(|r| r.kind == ResourceKind::Video));
    }

    #[test]
    fn test_interview_areas() {
        for area in ["content", "communication", "confidence"] {
            assert!(interview_area_resources(area).is_some(), "{area}");
        }
        assert!(interview_area_resources("python").is_none());
    }

    #[test]
    fn test_resource_serialization() {
        let json = serde_json::to_value(PYTHON[0]).unwrap();
        assert_eq!(json["kind"], "video");
        assert_eq!(json["duration"], "6 hours");
        let json = serde_json::to_value(COMPUTER_SCIENCE.channels[0]).unwrap();
        assert!(json.get("duration").is_none());
    }
}
