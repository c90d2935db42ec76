//! RefreshContentHandler - Command handler that reloads the catalog.

use serde::Serialize;
use std::sync::Arc;

use super::ContentError;
use crate::application::ContentStore;
use crate::domain::foundation::CollectionType;

/// Bucket sizes after a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub memorandum: usize,
    pub corrective: usize,
    pub total: usize,
}

pub struct RefreshContentHandler {
    store: Arc<ContentStore>,
}

impl RefreshContentHandler {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<RefreshSummary, ContentError> {
        let catalog = self.store.refresh().await?;

        Ok(RefreshSummary {
            memorandum: catalog.bucket(CollectionType::Memorandum).len(),
            corrective: catalog.bucket(CollectionType::Corrective).len(),
            total: catalog.len(),
        })
    }
}
