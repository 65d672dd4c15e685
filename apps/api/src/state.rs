use std::sync::Arc;

use crate::config::Config;
use crate::matching::ScoringWeights;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Scoring constants, built once at startup and cloned cheaply into blocking tasks.
    pub weights: Arc<ScoringWeights>,
}

impl AppState {
    pub fn new(config: Config, weights: ScoringWeights) -> Self {
        Self {
            config,
            weights: Arc::new(weights),
        }
    }
}
