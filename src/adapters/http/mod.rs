//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes triad; `router` assembles them.

pub mod analytics;
pub mod content;
pub mod error;
pub mod middleware;
pub mod router;

pub use analytics::{analytics_routes, AnalyticsAppState};
pub use content::{content_routes, ContentAppState};
pub use error::{ApiError, ErrorResponse};
pub use router::{build_router, RouterOptions};
