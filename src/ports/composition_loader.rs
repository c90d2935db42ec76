//! CompositionLoader port - where compositions come from.
//!
//! Adapters fetch raw documents (files, content API), validate them into
//! `Composition`s and hand back one flat list tagged by collection. Retries
//! belong to the adapter; the content store only sees the final outcome.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::composition::Composition;
use crate::domain::foundation::CollectionType;

/// Port for loading every composition from the content source.
#[async_trait]
pub trait CompositionLoader: Send + Sync {
    /// Fetches all compositions, tagged with their collection type.
    ///
    /// Order within each collection is the navigation order.
    async fn fetch_collections(&self) -> Result<Vec<Composition>, LoadError>;

    /// Short name of the content source, used in logs.
    fn source_name(&self) -> &str;
}

/// Errors raised while loading content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("collection '{collection}' unavailable after {attempts} attempts: {reason}")]
    Unavailable {
        collection: CollectionType,
        attempts: u32,
        reason: String,
    },

    #[error("malformed document '{source_name}': {reason}")]
    Malformed { source_name: String, reason: String },

    #[error("request failed: {0}")]
    Request(String),

    #[error("i/o error: {0}")]
    Io(String),
}

impl LoadError {
    /// Creates a malformed document error.
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        LoadError::Malformed {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a request error.
    pub fn request(reason: impl Into<String>) -> Self {
        LoadError::Request(reason.into())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}
