//! HTTP handlers for analytics endpoints.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use chrono::Utc;
use tracing::warn;

use super::dto::{RecordPageViewRequest, ViewCounts};
use crate::application::{GetViewCountsHandler, RecordPageViewCommand, RecordPageViewHandler};
use crate::ports::PageViewRecorder;

/// Shared state for analytics endpoints.
#[derive(Clone)]
pub struct AnalyticsAppState {
    pub recorder: Arc<dyn PageViewRecorder>,
}

impl AnalyticsAppState {
    pub fn new(recorder: Arc<dyn PageViewRecorder>) -> Self {
        Self { recorder }
    }

    pub fn record_handler(&self) -> RecordPageViewHandler {
        RecordPageViewHandler::new(self.recorder.clone())
    }

    pub fn view_counts_handler(&self) -> GetViewCountsHandler {
        GetViewCountsHandler::new(self.recorder.clone())
    }
}

/// POST /api/analytics/page-views
///
/// Always answers 202 without waiting for the store. Unreadable bodies and
/// recording problems are logged, never reported.
pub async fn record_page_view(State(state): State<AnalyticsAppState>, body: Bytes) -> StatusCode {
    match serde_json::from_slice::<RecordPageViewRequest>(&body) {
        Ok(request) => Arc::new(state.record_handler())
            .spawn(RecordPageViewCommand { path: request.path }),
        Err(e) => warn!(error = %e, "Ignoring unreadable page-view body"),
    }
    StatusCode::ACCEPTED
}

/// GET /api/analytics/view-counts
pub async fn get_view_counts(State(state): State<AnalyticsAppState>) -> Json<ViewCounts> {
    Json(state.view_counts_handler().handle(Utc::now()).await)
}
