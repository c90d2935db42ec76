//! ListCollectionHandler - Query handler for one collection's listing.

use serde::Serialize;
use std::sync::Arc;

use super::ContentError;
use crate::application::ContentStore;
use crate::domain::foundation::{CollectionType, CompositionOrdinal};

/// Query for the compositions of one collection.
#[derive(Debug, Clone)]
pub struct ListCollectionQuery {
    pub collection: CollectionType,
}

/// One row of a collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionSummary {
    pub ordinal: CompositionOrdinal,
    pub title: String,
    pub section_count: usize,
    /// First section of the composition, if it has any.
    pub start_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionListing {
    pub collection: CollectionType,
    pub title: String,
    pub compositions: Vec<CompositionSummary>,
}

pub struct ListCollectionHandler {
    store: Arc<ContentStore>,
}

impl ListCollectionHandler {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListCollectionQuery) -> Result<CollectionListing, ContentError> {
        let catalog = self.store.ensure_loaded().await?;

        let compositions = catalog
            .bucket(query.collection)
            .iter()
            .enumerate()
            .map(|(index, composition)| {
                let ordinal = CompositionOrdinal::from_index(index);
                CompositionSummary {
                    ordinal,
                    title: composition.title().to_string(),
                    section_count: composition.section_count(),
                    start_path: (composition.section_count() > 0).then(|| {
                        format!(
                            "/composition/{}/composition/{}/section/1",
                            query.collection, ordinal
                        )
                    }),
                }
            })
            .collect();

        Ok(CollectionListing {
            collection: query.collection,
            title: query.collection.display_title().to_string(),
            compositions,
        })
    }
}
