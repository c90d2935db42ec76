//! In-memory page-view store for development and tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::analytics::PageView;
use crate::ports::{AnalyticsError, PageViewRecorder};

#[derive(Debug, Default)]
pub struct InMemoryPageViewStore {
    views: Mutex<Vec<PageView>>,
}

impl InMemoryPageViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded paths in insertion order.
    pub fn paths(&self) -> Vec<String> {
        self.lock().iter().map(|view| view.path.clone()).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PageView>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl PageViewRecorder for InMemoryPageViewStore {
    async fn record(&self, view: &PageView) -> Result<(), AnalyticsError> {
        self.lock().push(view.clone());
        Ok(())
    }

    async fn views_since(&self, since: DateTime<Utc>) -> Result<Vec<DateTime<Utc>>, AnalyticsError> {
        Ok(self
            .lock()
            .iter()
            .filter(|view| view.viewed_at >= since)
            .map(|view| view.viewed_at)
            .collect())
    }

    async fn total(&self) -> Result<u64, AnalyticsError> {
        Ok(self.lock().len() as u64)
    }
}
