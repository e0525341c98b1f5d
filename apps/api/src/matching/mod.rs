// Employer matching: candidate profile derivation, catalog, per-dimension
// scoring and ranking.

pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod profile;
pub mod scoring;
