//! Featured-section aggregation across all collections.

use serde::Serialize;

use super::{Catalog, ReadingPath, Section};
use crate::domain::foundation::{CollectionType, CompositionOrdinal, SectionOrdinal};

/// A featured section tagged with where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedSection {
    pub collection: CollectionType,
    pub composition_index: CompositionOrdinal,
    pub section_index: SectionOrdinal,
    pub composition_title: String,
    pub section: Section,
}

impl FeaturedSection {
    /// Reading path of the featured section.
    pub fn path(&self) -> ReadingPath {
        ReadingPath::new(self.collection, self.composition_index, self.section_index)
    }
}

/// Collects every featured section.
///
/// Ordered by bucket, then composition, then section; nothing is sorted by
/// content. Buckets are disjoint by construction.
pub fn featured_sections(catalog: &Catalog) -> Vec<FeaturedSection> {
    let mut featured = Vec::new();

    for (collection, compositions) in catalog.buckets() {
        for (composition_index, composition) in compositions.iter().enumerate() {
            for (section_index, section) in composition.sections().iter().enumerate() {
                if section.is_featured() {
                    featured.push(FeaturedSection {
                        collection,
                        composition_index: CompositionOrdinal::from_index(composition_index),
                        section_index: SectionOrdinal::from_index(section_index),
                        composition_title: composition.title().to_string(),
                        section: section.clone(),
                    });
                }
            }
        }
    }

    featured
}
