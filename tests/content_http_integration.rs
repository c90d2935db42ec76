//! Integration tests for the HTTP surface.
//!
//! These tests drive the full router with in-memory adapters:
//! 1. Section reads with reading-level fallback and navigation
//! 2. Featured aggregation across collections
//! 3. Not-found and validation error mapping
//! 4. Page-view recording and view counts

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use composition_site::adapters::analytics::InMemoryPageViewStore;
use composition_site::adapters::content::InMemoryCompositionLoader;
use composition_site::adapters::http::{
    build_router, AnalyticsAppState, ContentAppState, RouterOptions,
};
use composition_site::application::ContentStore;
use composition_site::domain::composition::{Composition, Section};
use composition_site::domain::analytics::PageView;
use composition_site::domain::foundation::CollectionType;
use composition_site::ports::{AnalyticsError, PageViewRecorder};

use async_trait::async_trait;
use std::time::Instant;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn compositions() -> Vec<Composition> {
    vec![
        Composition::new(
            1,
            "On Indivisibility",
            CollectionType::Memorandum,
            vec![Section::new("Opening", "The intermediate text.")
                .unwrap()
                .featured(true)],
        )
        .unwrap(),
        Composition::new(
            1,
            "Correcting the Record",
            CollectionType::Corrective,
            vec![
                Section::new("Claim", "What was said.").unwrap(),
                Section::new("Evidence", "What the sources show.")
                    .unwrap()
                    .with_basic("Short version."),
            ],
        )
        .unwrap(),
    ]
}

struct TestApp {
    router: Router,
    views: Arc<InMemoryPageViewStore>,
}

fn app(options: RouterOptions) -> TestApp {
    let loader = Arc::new(InMemoryCompositionLoader::new(compositions()));
    let store = Arc::new(ContentStore::new(loader));
    let views = Arc::new(InMemoryPageViewStore::new());

    let router = build_router(
        ContentAppState::new(store),
        Some(AnalyticsAppState::new(views.clone())),
        &options,
    );
    TestApp { router, views }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Recording runs on a spawned task; wait until `expected` views are stored.
async fn wait_for_views(views: &InMemoryPageViewStore, expected: usize) {
    for _ in 0..50 {
        if views.paths().len() >= expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Recorder whose inserts take a long time.
struct SlowRecorder {
    delay: Duration,
}

#[async_trait]
impl PageViewRecorder for SlowRecorder {
    async fn record(&self, _view: &PageView) -> Result<(), AnalyticsError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn views_since(&self, _since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        Ok(vec![])
    }

    async fn total(&self) -> Result<u64, AnalyticsError> {
        Ok(0)
    }
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

// =============================================================================
// Content
// =============================================================================

#[tokio::test]
async fn basic_level_falls_back_to_intermediate_with_notice() {
    let app = app(RouterOptions::default());

    let (status, body) = get(
        &app.router,
        "/api/composition/memorandum/composition/1/section/1?level=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["markdown"], "The intermediate text.");
    assert_eq!(body["requested_level"], 1);
    assert_eq!(body["served_level"], 3);
    assert_eq!(
        body["notice"],
        "Content not available at requested level, showing intermediate level instead."
    );
    assert_eq!(body["position_label"], "Section 1 of 1");
    assert_eq!(body["previous"], Value::Null);
    assert_eq!(body["next"], Value::Null);
}

#[tokio::test]
async fn available_level_is_served_without_notice() {
    let app = app(RouterOptions::default());

    let (status, body) = get(
        &app.router,
        "/api/composition/data/composition/1/section/2?level=1",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collection"], "corrective");
    assert_eq!(body["markdown"], "Short version.");
    assert_eq!(body["served_level"], 1);
    assert_eq!(body["notice"], Value::Null);
    assert_eq!(
        body["previous"],
        "/composition/corrective/composition/1/section/1"
    );
    assert_eq!(body["contents"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn collection_listing_uses_display_title() {
    let app = app(RouterOptions::default());

    let (status, body) = get(&app.router, "/api/collections/manuscript").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["collection"], "memorandum");
    assert_eq!(body["title"], "Memorandum & White Papers");
    assert_eq!(body["compositions"][0]["title"], "On Indivisibility");
    assert_eq!(body["compositions"][0]["section_count"], 1);
}

#[tokio::test]
async fn featured_lists_flagged_sections_only() {
    let app = app(RouterOptions::default());

    let (status, body) = get(&app.router, "/api/featured").await;

    assert_eq!(status, StatusCode::OK);
    let featured = body.as_array().unwrap();
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0]["composition_index"], 1);
    assert_eq!(featured[0]["section_index"], 1);
    assert_eq!(featured[0]["section_title"], "Opening");
    assert_eq!(
        featured[0]["path"],
        "/composition/memorandum/composition/1/section/1"
    );
}

#[tokio::test]
async fn refresh_reports_bucket_sizes() {
    let app = app(RouterOptions::default());

    let (status, body) = post_json(&app.router, "/api/content/refresh", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["memorandum"], 1);
    assert_eq!(body["corrective"], 1);
    assert_eq!(body["total"], 2);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn missing_section_is_404_with_collection_link() {
    let app = app(RouterOptions::default());

    let (status, body) = get(
        &app.router,
        "/api/composition/memorandum/composition/1/section/99",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SECTION_NOT_FOUND");
    assert_eq!(body["details"]["collection_path"], "/composition/memorandum");
}

#[tokio::test]
async fn unknown_collection_is_404() {
    let app = app(RouterOptions::default());

    let (status, body) = get(&app.router, "/api/collections/map").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "COLLECTION_NOT_FOUND");
}

#[tokio::test]
async fn unsupported_level_is_400() {
    let app = app(RouterOptions::default());

    let (status, body) = get(
        &app.router,
        "/api/composition/memorandum/composition/1/section/1?level=2",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn unparseable_level_is_400_with_error_body() {
    let app = app(RouterOptions::default());

    for level in ["abc", "300"] {
        let (status, body) = get(
            &app.router,
            &format!("/api/composition/memorandum/composition/1/section/1?level={}", level),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }
}

#[tokio::test]
async fn section_zero_is_400() {
    let app = app(RouterOptions::default());

    let (status, _) = get(
        &app.router,
        "/api/composition/memorandum/composition/1/section/0",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Analytics
// =============================================================================

#[tokio::test]
async fn page_view_is_accepted_and_counted() {
    let app = app(RouterOptions::default());

    let (status, _) = post_json(
        &app.router,
        "/api/analytics/page-views",
        json!({ "path": "/composition/memorandum" }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    wait_for_views(&app.views, 1).await;

    let (status, counts) = get(&app.router, "/api/analytics/view-counts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts["total"], 1);
    assert_eq!(counts["today"], 1);
    assert_eq!(counts["this_week"], 1);
    assert_eq!(counts["this_month"], 1);
}

#[tokio::test]
async fn invalid_page_view_is_still_accepted_but_not_stored() {
    let app = app(RouterOptions::default());

    let (status, _) = post_json(
        &app.router,
        "/api/analytics/page-views",
        json!({ "path": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(app.views.paths().is_empty());
}

#[tokio::test]
async fn unreadable_page_view_bodies_are_accepted() {
    let app = app(RouterOptions::default());

    let (status, _) = post_json(
        &app.router,
        "/api/analytics/page-views",
        json!({ "nope": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let request = Request::post("/api/analytics/page-views")
        .body(Body::from(r#"{"path": "/composition/memorandum"}"#))
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    let request = Request::post("/api/analytics/page-views")
        .body(Body::from("not json"))
        .unwrap();
    let (status, _) = send(&app.router, request).await;
    assert_eq!(status, StatusCode::ACCEPTED);
}

#[tokio::test]
async fn page_view_response_does_not_wait_for_the_store() {
    let loader = Arc::new(InMemoryCompositionLoader::new(compositions()));
    let store = Arc::new(ContentStore::new(loader));
    let recorder = Arc::new(SlowRecorder {
        delay: Duration::from_millis(700),
    });
    let router = build_router(
        ContentAppState::new(store),
        Some(AnalyticsAppState::new(recorder)),
        &RouterOptions::default(),
    );

    let started = Instant::now();
    let (status, _) = post_json(
        &router,
        "/api/analytics/page-views",
        json!({ "path": "/composition/memorandum" }),
    )
    .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(started.elapsed() < Duration::from_millis(300));
}

#[tokio::test]
async fn middleware_records_successful_gets() {
    let app = app(RouterOptions {
        record_all_requests: true,
        ..RouterOptions::default()
    });

    let (status, _) = get(&app.router, "/api/featured").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app.router, "/api/collections/map").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get(&app.router, "/health").await;
    assert_eq!(status, StatusCode::OK);

    wait_for_views(&app.views, 1).await;
    assert_eq!(app.views.paths(), vec!["/api/featured".to_string()]);
}

#[tokio::test]
async fn analytics_routes_absent_when_disabled() {
    let loader = Arc::new(InMemoryCompositionLoader::new(compositions()));
    let store = Arc::new(ContentStore::new(loader));
    let router = build_router(ContentAppState::new(store), None, &RouterOptions::default());

    let response = router
        .oneshot(
            Request::get("/api/analytics/view-counts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
