//! Axum route handlers for interview and résumé analysis.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::context::{Branch, InterviewType};
use crate::analysis::interview::{analyze_response, ResponseFeedback};
use crate::analysis::resume::{analyze_resume, ResumeAnalysis};
use crate::analysis::summary::{summarize_session, SessionSummary};
use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeAnswerRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub interview_type: String,
}

#[derive(Debug, Serialize)]
pub struct AnswerAnalysis {
    pub question: String,
    pub interview_type: InterviewType,
    #[serde(flatten)]
    pub feedback: ResponseFeedback,
}

#[derive(Debug, Deserialize)]
pub struct SessionSummaryRequest {
    #[serde(default)]
    pub responses: Vec<ResponseFeedback>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub branch: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeEvaluation {
    pub branch: Branch,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub analysis: ResumeAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/analyze
pub async fn handle_analyze_answer(
    Json(req): Json<AnalyzeAnswerRequest>,
) -> Result<Json<Envelope<AnswerAnalysis>>, AppError> {
    let interview_type: InterviewType = req.interview_type.parse()?;
    let feedback = analyze_response(&req.answer, interview_type);

    Ok(Json(Envelope::new(AnswerAnalysis {
        question: req.question,
        interview_type,
        feedback,
    })))
}

/// POST /api/v1/interview/summary
///
/// Aggregates previously returned feedback; scores are averaged, not recomputed.
pub async fn handle_session_summary(
    Json(req): Json<SessionSummaryRequest>,
) -> Result<Json<Envelope<SessionSummary>>, AppError> {
    let summary = summarize_session(&req.responses)?;
    Ok(Json(Envelope::new(summary)))
}

/// POST /api/v1/resume/analyze
pub async fn handle_analyze_resume(
    Json(req): Json<AnalyzeResumeRequest>,
) -> Json<Envelope<ResumeEvaluation>> {
    let branch = req.branch.as_deref().map(Branch::from_name).unwrap_or_default();
    let analysis = analyze_resume(&req.text, branch);

    Json(Envelope::new(ResumeEvaluation {
        branch,
        file_name: None,
        analysis,
    }))
}

/// POST /api/v1/resume/evaluate
///
/// Multipart upload with a `file` part (`.pdf` or `.txt`) and an optional
/// `branch` part.
pub async fn handle_evaluate_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Envelope<ResumeEvaluation>>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut branch = Branch::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                upload = Some((file_name, data.to_vec()));
            }
            Some("branch") => {
                let name = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                branch = Branch::from_name(&name);
            }
            _ => {}
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("missing 'file' part".to_string()))?;
    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::Validation(format!(
            "file exceeds the {} byte upload limit",
            state.config.max_upload_bytes
        )));
    }

    let text = extract_upload_text(&file_name, data).await?;
    info!(%branch, bytes = text.len(), "evaluating uploaded resume");
    let analysis = analyze_resume(&text, branch);

    Ok(Json(Envelope::new(ResumeEvaluation {
        branch,
        file_name: Some(file_name),
        analysis,
    })))
}

/// PDF text extraction runs on the blocking pool.
async fn extract_upload_text(file_name: &str, data: Vec<u8>) -> Result<String, AppError> {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".txt") {
        return String::from_utf8(data)
            .map_err(|_| AppError::Validation("text file is not valid UTF-8".to_string()));
    }
    if !lower.ends_with(".pdf") {
        return Err(AppError::Validation(format!(
            "unsupported file type for '{file_name}' (expected .pdf or .txt)"
        )));
    }

    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::Validation(format!("could not read PDF: {e}")))
}
