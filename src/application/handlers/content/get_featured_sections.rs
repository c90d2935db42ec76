//! GetFeaturedSectionsHandler - Query handler for the landing-page surface.

use std::sync::Arc;

use super::ContentError;
use crate::application::ContentStore;
use crate::domain::composition::{featured_sections, FeaturedSection};

pub struct GetFeaturedSectionsHandler {
    store: Arc<ContentStore>,
}

impl GetFeaturedSectionsHandler {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<FeaturedSection>, ContentError> {
        let catalog = self.store.ensure_loaded().await?;
        Ok(featured_sections(&catalog))
    }
}
