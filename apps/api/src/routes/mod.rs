pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matching/score", post(handlers::handle_score))
        .route("/api/v1/matching/skill-gap", post(handlers::handle_skill_gap))
        .route(
            "/api/v1/matching/candidates",
            post(handlers::handle_match_candidates),
        )
        .route("/api/v1/matching/jobs", post(handlers::handle_match_jobs))
        .with_state(state)
}
