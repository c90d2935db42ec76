//! Named collection buckets that partition compositions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The bucket a composition belongs to.
///
/// The content source has used two spellings for the same buckets over time
/// (`manuscript`/`data` and `memorandum`/`corrective`); both are accepted on
/// input and the canonical slug is always written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    #[serde(alias = "manuscript")]
    Memorandum,
    #[serde(alias = "data")]
    Corrective,
}

impl CollectionType {
    /// Bucket iteration order used by every cross-collection view.
    pub const ALL: [CollectionType; 2] = [CollectionType::Memorandum, CollectionType::Corrective];

    /// Parses a slug, accepting the alternate spellings.
    ///
    /// Returns `None` for anything unrecognized.
    pub fn parse(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "memorandum" | "manuscript" => Some(CollectionType::Memorandum),
            "corrective" | "data" => Some(CollectionType::Corrective),
            _ => None,
        }
    }

    /// Canonical URL slug.
    pub fn slug(&self) -> &'static str {
        match self {
            CollectionType::Memorandum => "memorandum",
            CollectionType::Corrective => "corrective",
        }
    }

    /// Heading shown above the collection listing.
    pub fn display_title(&self) -> &'static str {
        match self {
            CollectionType::Memorandum => "Memorandum & White Papers",
            CollectionType::Corrective => "Corrective & Evidence",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CollectionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            ValidationError::unsupported("collection_type", s, "memorandum, corrective")
        })
    }
}
