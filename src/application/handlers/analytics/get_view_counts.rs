//! GetViewCountsHandler - Query handler for the admin view counter.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::warn;

use crate::domain::analytics::{CountWindows, ViewCounts};
use crate::ports::{AnalyticsError, PageViewRecorder};

pub struct GetViewCountsHandler {
    recorder: Arc<dyn PageViewRecorder>,
}

impl GetViewCountsHandler {
    pub fn new(recorder: Arc<dyn PageViewRecorder>) -> Self {
        Self { recorder }
    }

    /// Counts views relative to `now`. Store failures degrade to zeros.
    pub async fn handle(&self, now: DateTime<Utc>) -> ViewCounts {
        match self.count(now).await {
            Ok(counts) => counts,
            Err(e) => {
                warn!(error = %e, "Error getting view counts");
                ViewCounts::default()
            }
        }
    }

    async fn count(&self, now: DateTime<Utc>) -> Result<ViewCounts, AnalyticsError> {
        let windows = CountWindows::at(now);
        let total = self.recorder.total().await?;
        let recent = self.recorder.views_since(windows.earliest()).await?;
        Ok(ViewCounts::tally(total, &recent, &windows))
    }
}
