//! Reader-facing URL of a single section.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    CollectionType, CompositionOrdinal, SectionOrdinal, ValidationError,
};

/// `/composition/{collection}/composition/{composition}/section/{section}`,
/// all ordinals 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ReadingPath {
    pub collection: CollectionType,
    pub composition: CompositionOrdinal,
    pub section: SectionOrdinal,
}

impl ReadingPath {
    pub fn new(
        collection: CollectionType,
        composition: CompositionOrdinal,
        section: SectionOrdinal,
    ) -> Self {
        Self {
            collection,
            composition,
            section,
        }
    }

    /// Same composition, different section.
    pub fn with_section(self, section: SectionOrdinal) -> Self {
        Self { section, ..self }
    }

    /// Path of the collection listing this section belongs to.
    pub fn collection_path(&self) -> String {
        format!("/composition/{}", self.collection)
    }
}

impl fmt::Display for ReadingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/composition/{}/composition/{}/section/{}",
            self.collection, self.composition, self.section
        )
    }
}

impl FromStr for ReadingPath {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            ["composition", collection, "composition", composition, "section", section] => {
                Ok(Self {
                    collection: collection.parse()?,
                    composition: composition.parse()?,
                    section: section.parse()?,
                })
            }
            _ => Err(ValidationError::invalid_format(
                "path",
                "expected /composition/{collection}/composition/{n}/section/{n}",
            )),
        }
    }
}
