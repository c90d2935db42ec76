//! In-memory composition loader for tests and local demos.

use async_trait::async_trait;

use crate::domain::composition::Composition;
use crate::ports::{CompositionLoader, LoadError};

/// Serves a fixed list of compositions.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCompositionLoader {
    compositions: Vec<Composition>,
}

impl InMemoryCompositionLoader {
    pub fn new(compositions: Vec<Composition>) -> Self {
        Self { compositions }
    }
}

#[async_trait]
impl CompositionLoader for InMemoryCompositionLoader {
    async fn fetch_collections(&self) -> Result<Vec<Composition>, LoadError> {
        Ok(self.compositions.clone())
    }

    fn source_name(&self) -> &str {
        "memory"
    }
}
