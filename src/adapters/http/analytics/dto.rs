//! HTTP DTOs for analytics endpoints.

pub use crate::domain::analytics::ViewCounts;

use serde::Deserialize;

/// Body of a page-view report.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPageViewRequest {
    pub path: String,
}
