use std::sync::Arc;

use crate::config::Config;
use crate::matching::catalog::Catalog;
use crate::matching::matcher::{CompatibilityScorer, HeuristicMatcher};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup.
    pub catalog: Arc<Catalog>,
    /// Pluggable matcher. Default: HeuristicMatcher.
    pub matcher: Arc<dyn CompatibilityScorer>,
}

impl AppState {
    /// State with the default heuristic matcher.
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
            matcher: Arc::new(HeuristicMatcher::default()),
        }
    }
}
