//! Axum route handlers for interview and quiz practice material.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::analysis::context::InterviewType;
use crate::errors::AppError;
use crate::practice::questions::{interview_questions, InterviewQuestion};
use crate::practice::quiz::{quiz_questions, QuizCategory, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct InterviewQuestionsResponse {
    pub interview_type: InterviewType,
    pub questions: Vec<InterviewQuestion>,
}

#[derive(Debug, Serialize)]
pub struct QuizQuestionsResponse {
    pub category: QuizCategory,
    pub questions: Vec<QuizQuestion>,
}

/// GET /api/v1/interview/questions/:interview_type
pub async fn handle_interview_questions(
    Path(interview_type): Path<String>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let interview_type: InterviewType = interview_type.parse()?;
    Ok(Json(InterviewQuestionsResponse {
        interview_type,
        questions: interview_questions(interview_type),
    }))
}

/// GET /api/v1/quiz/questions/:category
pub async fn handle_quiz_questions(
    Path(category): Path<String>,
) -> Result<Json<QuizQuestionsResponse>, AppError> {
    let category: QuizCategory = category.parse()?;
    Ok(Json(QuizQuestionsResponse {
        category,
        questions: quiz_questions(category),
    }))
}
