pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::roadmap::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/generate-roadmap",
            post(handlers::handle_generate_roadmap),
        )
        .with_state(state)
}
