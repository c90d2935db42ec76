//! PageViewRecorder port - persistence for page-view analytics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::analytics::PageView;

/// Port for recording and querying page views.
#[async_trait]
pub trait PageViewRecorder: Send + Sync {
    /// Persists one page view.
    async fn record(&self, view: &PageView) -> Result<(), AnalyticsError>;

    /// Timestamps of every view at or after `since`.
    async fn views_since(&self, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AnalyticsError>;

    /// Number of views ever recorded.
    async fn total(&self) -> Result<u64, AnalyticsError>;
}

/// Errors that can occur in the analytics store.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Analytics store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for AnalyticsError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AnalyticsError::Unavailable(err.to_string())
            }
            other => AnalyticsError::Database(other.to_string()),
        }
    }
}
