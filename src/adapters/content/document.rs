//! Raw composition documents as authored in the CMS.
//!
//! Documents are parsed into these loose shapes first and then validated into
//! domain types in one step; nothing downstream ever sees a half-valid
//! composition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::composition::{Composition, Section};
use crate::domain::foundation::CollectionType;
use crate::ports::LoadError;

/// Serialization format of a document source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "yaml" | "yml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, alias = "contentLevel1", skip_serializing_if = "Option::is_none")]
    pub content_level_1: Option<String>,
    #[serde(default, alias = "contentLevel3")]
    pub content_level_3: Option<String>,
    #[serde(default, alias = "contentLevel5", skip_serializing_if = "Option::is_none")]
    pub content_level_5: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositionDocument {
    pub title: String,
    #[serde(default, alias = "collectionType", skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionDocument>,
}

impl CompositionDocument {
    /// Parses a single document.
    pub fn parse(
        raw: &str,
        format: DocumentFormat,
        source_name: &str,
    ) -> Result<Self, LoadError> {
        match format {
            DocumentFormat::Json => serde_json::from_str(raw)
                .map_err(|e| LoadError::malformed(source_name, e.to_string())),
            DocumentFormat::Yaml => serde_yaml::from_str(raw)
                .map_err(|e| LoadError::malformed(source_name, e.to_string())),
        }
    }

    /// Parses a JSON array of documents.
    pub fn parse_many(raw: &str, source_name: &str) -> Result<Vec<Self>, LoadError> {
        serde_json::from_str(raw).map_err(|e| LoadError::malformed(source_name, e.to_string()))
    }

    /// Works out which bucket the document belongs to.
    ///
    /// The document's own `collection_type` wins over the location it was
    /// loaded from. Unrecognized types yield `None` and a warning; such
    /// documents are invisible to every collection view.
    pub fn resolve_collection(
        &self,
        location: Option<CollectionType>,
        source_name: &str,
    ) -> Option<CollectionType> {
        match self.collection_type.as_deref().map(str::trim) {
            Some(declared) if !declared.is_empty() => {
                let parsed = CollectionType::parse(declared);
                if parsed.is_none() {
                    warn!(
                        source = source_name,
                        collection_type = declared,
                        "Dropping document with unrecognized collection type"
                    );
                }
                parsed
            }
            _ => {
                if location.is_none() {
                    warn!(source = source_name, "Dropping document without a collection type");
                }
                location
            }
        }
    }

    /// Validates the document into a composition.
    pub fn into_composition(
        self,
        collection: CollectionType,
        id: u32,
        source_name: &str,
    ) -> Result<Composition, LoadError> {
        let sections = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(index, doc)| {
                let section = Section::new(doc.title, doc.content_level_3.unwrap_or_default())
                    .map_err(|e| {
                        LoadError::malformed(source_name, format!("section {}: {}", index + 1, e))
                    })?;
                Ok(section
                    .featured(doc.featured)
                    .with_basic(doc.content_level_1.unwrap_or_default())
                    .with_advanced(doc.content_level_5.unwrap_or_default()))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        Composition::new(id, self.title, collection, sections)
            .map_err(|e| LoadError::malformed(source_name, e.to_string()))
    }
}

/// Hands out 1-based positional ids per collection.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next: BTreeMap<CollectionType, u32>,
}

impl IdAllocator {
    pub(crate) fn next(&mut self, collection: CollectionType) -> u32 {
        let counter = self.next.entry(collection).or_insert(0);
        *counter += 1;
        *counter
    }
}
