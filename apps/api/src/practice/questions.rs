use serde::Serialize;

use crate::analysis::context::InterviewType;

const HR_QUESTIONS: &[&str] = &[
    "Tell me about yourself",
    "What are your strengths and weaknesses?",
    "Why do you want to work here?",
    "Where do you see yourself in 5 years?",
    "Describe a challenging situation you faced and how you handled it",
];

const TECHNICAL_QUESTIONS: &[&str] = &[
    "Explain the difference between stack and queue",
    "What is the time complexity of quicksort?",
    "Explain polymorphism in OOP",
    "What is a deadlock in operating systems?",
    "How does TCP differ from UDP?",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewQuestion {
    /// `<type>_<index>`, zero-based.
    pub id: String,
    pub question: &'static str,
}

/// The fixed question bank for one interview type, in asking order.
pub fn interview_questions(kind: InterviewType) -> Vec<InterviewQuestion> {
    let bank = match kind {
        InterviewType::Hr => HR_QUESTIONS,
        InterviewType::Technical => TECHNICAL_QUESTIONS,
    };
    bank.iter()
        .enumerate()
        .map(|(i, &question)| InterviewQuestion {
            id: format!("{kind}_{i}"),
            question,
        })
        .collect()
}
