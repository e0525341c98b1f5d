// Text analysis: feature extraction, interview and résumé calculators, and
// session aggregation. Everything except `handlers` is pure and synchronous.

pub mod band;
pub mod context;
pub mod features;
pub mod handlers;
pub mod interview;
pub mod lexicons;
pub mod resume;
pub mod summary;
pub mod text;
