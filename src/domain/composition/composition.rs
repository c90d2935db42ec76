//! Composition aggregate and the catalog of collection buckets.

use serde::Serialize;
use std::collections::BTreeMap;

use super::Section;
use crate::domain::foundation::{CollectionType, CompositionOrdinal, ValidationError};

/// One authored document containing an ordered list of sections.
///
/// Serializes to the same document shape the content loaders read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Composition {
    id: u32,
    title: String,
    collection_type: CollectionType,
    sections: Vec<Section>,
}

impl Composition {
    /// Creates a composition.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the title is blank.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        collection_type: CollectionType,
        sections: Vec<Section>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }

        Ok(Self {
            id,
            title,
            collection_type,
            sections,
        })
    }

    /// Position inside its collection, assigned at load time.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn collection_type(&self) -> CollectionType {
        self.collection_type
    }

    /// Sections in navigation order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }
}

/// All loaded compositions, partitioned into collection buckets.
///
/// A catalog is built whole and never mutated afterwards; the content store
/// swaps entire catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    buckets: BTreeMap<CollectionType, Vec<Composition>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Partitions a flat, tagged list into buckets.
    ///
    /// Relative order inside each bucket is preserved and ids are reassigned
    /// by position (1-based) within the bucket.
    pub fn from_compositions(compositions: Vec<Composition>) -> Self {
        let mut buckets: BTreeMap<CollectionType, Vec<Composition>> = BTreeMap::new();

        for composition in compositions {
            let bucket = buckets.entry(composition.collection_type()).or_default();
            let id = u32::try_from(bucket.len() + 1).unwrap_or(u32::MAX);
            bucket.push(composition.with_id(id));
        }

        Self { buckets }
    }

    /// Compositions in one bucket, in load order.
    pub fn bucket(&self, collection: CollectionType) -> &[Composition] {
        self.buckets
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Looks up a composition by its 1-based ordinal.
    pub fn composition(
        &self,
        collection: CollectionType,
        ordinal: CompositionOrdinal,
    ) -> Option<&Composition> {
        self.bucket(collection).get(ordinal.index())
    }

    /// Iterates buckets in `CollectionType::ALL` order.
    pub fn buckets(&self) -> impl Iterator<Item = (CollectionType, &[Composition])> + '_ {
        CollectionType::ALL
            .into_iter()
            .map(move |collection| (collection, self.bucket(collection)))
    }

    /// Total number of compositions across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
