//! Career-readiness scoring: interview answer and résumé analysis, employer
//! matching, and learning-resource recommendations, served over HTTP.

pub mod analysis;
pub mod config;
pub mod envelope;
pub mod errors;
pub mod learning;
pub mod matching;
pub mod practice;
pub mod routes;
pub mod state;
