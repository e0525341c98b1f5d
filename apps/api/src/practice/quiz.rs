use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizCategory {
    Aptitude,
    Coding,
}

impl QuizCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizCategory::Aptitude => "aptitude",
            QuizCategory::Coding => "coding",
        }
    }
}

impl fmt::Display for QuizCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizCategory {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aptitude" => Ok(QuizCategory::Aptitude),
            "coding" => Ok(QuizCategory::Coding),
            other => Err(ScoringError::InvalidInput(format!(
                "unknown quiz category '{other}' (expected 'aptitude' or 'coding')"
            ))),
        }
    }
}

/// Multiple-choice aptitude question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: &'static str,
    /// quantitative, logical or verbal
    pub category: &'static str,
}

/// Open coding exercise with a reference solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodingQuestion {
    pub id: &'static str,
    pub question: &'static str,
    pub language: &'static str,
    pub difficulty: &'static str,
    pub sample_answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuizQuestion {
    Choice(ChoiceQuestion),
    Coding(CodingQuestion),
}

const APTITUDE: &[ChoiceQuestion] = &[
    ChoiceQuestion {
        id: "apt_1",
        question: "If a train travels at 60 km/hr and covers a distance in 2 hours, what is the distance?",
        options: &["100 km", "120 km", "140 km", "160 km"],
        correct_answer: "120 km",
        category: "quantitative",
    },
    ChoiceQuestion {
        id: "apt_2",
        question: "What comes next in the series: 2, 4, 8, 16, ?",
        options: &["24", "32", "30", "28"],
        correct_answer: "32",
        category: "logical",
    },
    ChoiceQuestion {
        id: "apt_3",
        question: "Choose the synonym of 'Abundant':",
        options: &["Scarce", "Plentiful", "Rare", "Limited"],
        correct_answer: "Plentiful",
        category: "verbal",
    },
];

const CODING: &[CodingQuestion] = &[
    CodingQuestion {
        id: "code_1",
        question: "Write a function to reverse a string in Python",
        language: "python",
        difficulty: "easy",
        sample_answer: "def reverse_string(s):\n    return s[::-1]",
    },
    CodingQuestion {
        id: "code_2",
        question: "Implement binary search algorithm",
        language: "python",
        difficulty: "medium",
        sample_answer: "def binary_search(arr, target):\n    left, right = 0, len(arr) - 1\n    while left <= right:\n        mid = (left + right) // 2\n        if arr[mid] == target:\n            return mid\n        elif arr[mid] < target:\n            left = mid + 1\n        else:\n            right = mid - 1\n    return -1",
    },
];

pub fn quiz_questions(category: QuizCategory) -> Vec<QuizQuestion> {
    match category {
        QuizCategory::Aptitude => APTITUDE.iter().cloned().map(QuizQuestion::Choice).collect(),
        QuizCategory::Coding => CODING.iter().cloned().map(QuizQuestion::Coding).collect(),
    }
}
