//! HTTP REST API routes

mod error;
mod turn_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use error::{ApiError, ErrorBody};

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(turn_routes::home))
        .route("/health", get(turn_routes::health))
        .route("/api/cenarios", get(turn_routes::list_scenarios))
        .route("/api/{scenario_id}", post(turn_routes::play_turn))
}
