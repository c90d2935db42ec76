//! HTTP DTOs for content endpoints.
//!
//! Listings and section views are already shaped for serialization, so they
//! are re-exported directly.

pub use crate::application::{
    CollectionListing, CompositionSummary, RefreshSummary, SectionView, TableOfContentsEntry,
};

use serde::{Deserialize, Serialize};

use crate::domain::composition::FeaturedSection;
use crate::domain::foundation::{
    CollectionType, CompositionOrdinal, ReadingLevel, SectionOrdinal, ValidationError,
};

/// Query parameters for the section endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SectionParams {
    /// Reading level: 1, 3 or 5. Defaults to 3. Kept as text so bad values
    /// are reported as validation errors.
    pub level: Option<String>,
}

impl SectionParams {
    pub fn reading_level(&self) -> Result<ReadingLevel, ValidationError> {
        self.level
            .as_deref()
            .map(str::parse)
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// One card on the featured surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedSectionResponse {
    pub collection: CollectionType,
    pub composition_index: CompositionOrdinal,
    pub section_index: SectionOrdinal,
    pub composition_title: String,
    pub section_title: String,
    /// Intermediate-level markdown.
    pub content: String,
    pub path: String,
}

impl From<FeaturedSection> for FeaturedSectionResponse {
    fn from(featured: FeaturedSection) -> Self {
        let path = featured.path().to_string();
        Self {
            collection: featured.collection,
            composition_index: featured.composition_index,
            section_index: featured.section_index,
            composition_title: featured.composition_title,
            section_title: featured.section.title().to_string(),
            content: featured.section.intermediate().to_string(),
            path,
        }
    }
}
