//! Page-view recording middleware for axum.
//!
//! Records the path of every successful GET request on a background task.
//! The response is never delayed or altered by analytics.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, routing::get, middleware};
//! use std::sync::Arc;
//!
//! let recorder = Arc::new(RecordPageViewHandler::new(store));
//!
//! let app = Router::new()
//!     .route("/api/featured", get(handler))
//!     .layer(middleware::from_fn_with_state(recorder, page_view_middleware));
//! ```

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::application::{RecordPageViewCommand, RecordPageViewHandler};

/// Middleware state.
pub type PageViewState = Arc<RecordPageViewHandler>;

/// Paths that are never counted as page views.
const EXCLUDED_PREFIXES: &[&str] = &["/health", "/api/analytics"];

/// Returns true if a GET of `path` should be counted.
pub fn is_countable(path: &str) -> bool {
    !EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

pub async fn page_view_middleware(
    State(recorder): State<PageViewState>,
    request: Request,
    next: Next,
) -> Response {
    let path = (request.method() == Method::GET && is_countable(request.uri().path()))
        .then(|| request.uri().path().to_string());

    let response = next.run(request).await;

    if let Some(path) = path {
        if response.status().is_success() {
            recorder.spawn(RecordPageViewCommand { path });
        }
    }

    response
}
