//! Full application router.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::analytics::{analytics_routes, AnalyticsAppState};
use super::content::{content_routes, ContentAppState};
use super::middleware::page_view_middleware;

/// Router-level options taken from configuration.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
    pub record_all_requests: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: vec![],
            request_timeout: Duration::from_secs(30),
            record_all_requests: false,
        }
    }
}

/// Build the full axum router.
///
/// - Content API at `/api/collections`, `/api/composition`, `/api/featured`, `/api/content`
/// - Analytics API at `/api/analytics/*`, only when analytics is enabled
/// - Liveness at `/health`
pub fn build_router(
    content: ContentAppState,
    analytics: Option<AnalyticsAppState>,
    options: &RouterOptions,
) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .merge(content_routes(content));

    if let Some(analytics) = analytics {
        router = router.merge(analytics_routes(analytics.clone()));

        if options.record_all_requests {
            let recorder = Arc::new(analytics.record_handler());
            router = router.layer(middleware::from_fn_with_state(recorder, page_view_middleware));
        }
    }

    router
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors_layer(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// No usable configured origin means any origin is allowed.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::InMemoryCompositionLoader;
    use crate::application::ContentStore;
    use axum::body::Body;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn allowed_origin(cors_origins: Vec<String>, origin: &str) -> Option<String> {
        let store = Arc::new(ContentStore::new(Arc::new(
            InMemoryCompositionLoader::default(),
        )));
        let options = RouterOptions {
            cors_origins,
            ..RouterOptions::default()
        };
        let router = build_router(ContentAppState::new(store), None, &options);

        let response = router
            .oneshot(
                Request::get("/health")
                    .header(ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|value| value.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn blank_origins_allow_any() {
        let allowed = allowed_origin(vec![String::new()], "https://elsewhere.example").await;
        assert_eq!(allowed.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn configured_origin_is_echoed_and_others_refused() {
        let origins = vec!["https://reader.example.org".to_string()];

        let allowed = allowed_origin(origins.clone(), "https://reader.example.org").await;
        assert_eq!(allowed.as_deref(), Some("https://reader.example.org"));

        let refused = allowed_origin(origins, "https://elsewhere.example").await;
        assert!(refused.is_none());
    }
}
