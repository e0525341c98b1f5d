use axum::Json;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::learning::recommender::{recommend, Category};

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub weak_areas: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<Category>,
}

/// POST /api/v1/learning/recommendations
pub async fn handle_recommendations(
    Json(req): Json<RecommendationRequest>,
) -> Json<Envelope<RecommendationResponse>> {
    let recommendations = recommend(&req.skills, &req.branch, &req.weak_areas);
    Json(Envelope::new(RecommendationResponse { recommendations }))
}
