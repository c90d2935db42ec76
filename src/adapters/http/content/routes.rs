//! HTTP routes for content endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_collection, get_featured_sections, get_section, refresh_content, ContentAppState,
};

/// Creates the content router with all routes.
pub fn content_routes(state: ContentAppState) -> Router {
    Router::new()
        .route("/api/collections/:collection", get(get_collection))
        .route(
            "/api/composition/:collection/composition/:composition/section/:section",
            get(get_section),
        )
        .route("/api/featured", get(get_featured_sections))
        .route("/api/content/refresh", post(refresh_content))
        .with_state(state)
}
