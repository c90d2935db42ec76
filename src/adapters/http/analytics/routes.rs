//! HTTP routes for analytics endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_view_counts, record_page_view, AnalyticsAppState};

/// Creates the analytics router with all routes.
pub fn analytics_routes(state: AnalyticsAppState) -> Router {
    Router::new()
        .route("/api/analytics/page-views", post(record_page_view))
        .route("/api/analytics/view-counts", get(get_view_counts))
        .with_state(state)
}
