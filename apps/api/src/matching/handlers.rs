//! Axum route handlers for the Employer API.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::matching::catalog::EmployerProfile;
use crate::matching::matcher::MatchReport;
use crate::matching::profile::{CandidateProfile, LinkedInProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct EmployerListResponse {
    pub employers: Vec<EmployerProfile>,
    pub total: usize,
}

/// GET /api/v1/employers
pub async fn handle_list_employers(State(state): State<AppState>) -> Json<EmployerListResponse> {
    let employers = state.catalog.as_slice().to_vec();
    Json(EmployerListResponse {
        total: employers.len(),
        employers,
    })
}

/// GET /api/v1/employers/:id
pub async fn handle_get_employer(
    State(state): State<AppState>,
    Path(employer_id): Path<String>,
) -> Result<Json<EmployerProfile>, AppError> {
    state
        .catalog
        .get(&employer_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Employer {employer_id} not found")))
}

/// POST /api/v1/employers/match
///
/// Ranks the whole catalog against the submitted profile. The report borrows
/// catalog records, so it is serialised before the handler returns.
pub async fn handle_match_employers(
    State(state): State<AppState>,
    Json(raw): Json<LinkedInProfile>,
) -> Response {
    let candidate = CandidateProfile::from_linkedin(&raw);
    let ranked = state.matcher.rank(&candidate, &state.catalog);
    let report = MatchReport::new(&candidate, ranked);

    Json(Envelope::new(report)).into_response()
}
