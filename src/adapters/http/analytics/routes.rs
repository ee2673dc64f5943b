//! HTTP routes for analytics endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_default_report, get_report, health, AnalyticsAppState};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        // GET /api/analytics
        .route("/api/analytics", get(get_default_report))
        // GET /api/analytics/:view
        .route("/api/analytics/:view", get(get_report))
        // GET /health
        .route("/health", get(health))
        .with_state(state)
}
