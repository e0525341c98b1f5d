pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::learning::handlers as learning;
use crate::matching::handlers as matching;
use crate::practice::handlers as practice;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Interview practice
        .route(
            "/api/v1/interview/questions/:interview_type",
            get(practice::handle_interview_questions),
        )
        .route(
            "/api/v1/interview/analyze",
            post(analysis::handle_analyze_answer),
        )
        .route(
            "/api/v1/interview/summary",
            post(analysis::handle_session_summary),
        )
        .route(
            "/api/v1/quiz/questions/:category",
            get(practice::handle_quiz_questions),
        )
        // Résumé analysis
        .route("/api/v1/resume/analyze", post(analysis::handle_analyze_resume))
        .route(
            "/api/v1/resume/evaluate",
            post(analysis::handle_evaluate_resume)
                // Multipart framing adds a little on top of the file itself.
                .layer(DefaultBodyLimit::max(upload_limit + 64 * 1024)),
        )
        // Employer matching
        .route("/api/v1/employers", get(matching::handle_list_employers))
        .route("/api/v1/employers/:id", get(matching::handle_get_employer))
        .route(
            "/api/v1/employers/match",
            post(matching::handle_match_employers),
        )
        // Learning resources
        .route(
            "/api/v1/learning/recommendations",
            post(learning::handle_recommendations),
        )
        .with_state(state)
}
