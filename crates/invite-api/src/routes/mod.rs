//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, verify};
use crate::state::AppState;

/// Create the main API router
pub fn create_router() -> Router<AppState> {
    Router::new().merge(verify_routes()).merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Verification routes
fn verify_routes() -> Router<AppState> {
    Router::new().route(
        "/verify",
        post(verify::verify)
            .options(verify::preflight)
            .fallback(verify::method_not_allowed),
    )
}
