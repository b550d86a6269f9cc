//! HTTP route handlers.

use axum::{Json, Router, extract::State, routing::get};
use tower_http::services::ServeDir;

use super::dto::DashboardSnapshot;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the display shell's static assets.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/dashboard", get(dashboard))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// The current dashboard snapshot.
async fn dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.snapshot().await)
}
