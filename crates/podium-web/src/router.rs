//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    api::{api_leaderboard, api_summary, refresh},
    dashboard::dashboard,
};
use crate::state::SharedState;

/// Build and return the full Axum router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Pages
        .route("/", get(dashboard))
        .route("/refresh", post(refresh))

        // API endpoints
        .route("/api/leaderboard", get(api_leaderboard))
        .route("/api/summary", get(api_summary))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
