//! Errors returned by content query handlers.

use thiserror::Error;

use crate::domain::composition::ReadingPath;
use crate::domain::foundation::{
    CollectionType, CompositionOrdinal, ErrorCode, ValidationError,
};
use crate::ports::LoadError;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Collection '{0}' not found")]
    CollectionNotFound(String),

    #[error("Composition {ordinal} not found in '{collection}'")]
    CompositionNotFound {
        collection: CollectionType,
        ordinal: CompositionOrdinal,
    },

    #[error("Section not found: {path} (composition has {total} sections)")]
    SectionNotFound { path: ReadingPath, total: usize },

    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load content: {0}")]
    Load(#[from] LoadError),
}

impl ContentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ContentError::CollectionNotFound(_) => ErrorCode::CollectionNotFound,
            ContentError::CompositionNotFound { .. } => ErrorCode::CompositionNotFound,
            ContentError::SectionNotFound { .. } => ErrorCode::SectionNotFound,
            ContentError::Validation(_) => ErrorCode::ValidationFailed,
            ContentError::Load(LoadError::Malformed { .. }) => ErrorCode::ContentMalformed,
            ContentError::Load(_) => ErrorCode::ContentUnavailable,
        }
    }

    /// Where a reader can go back to after a not-found error.
    pub fn recovery_path(&self) -> Option<String> {
        match self {
            ContentError::CompositionNotFound { collection, .. } => {
                Some(format!("/composition/{}", collection))
            }
            ContentError::SectionNotFound { path, .. } => Some(path.collection_path()),
            ContentError::CollectionNotFound(_) => Some("/".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SectionOrdinal;

    #[test]
    fn section_not_found_links_back_to_collection() {
        let path = ReadingPath::new(
            CollectionType::Corrective,
            CompositionOrdinal::new(1).unwrap(),
            SectionOrdinal::new(99).unwrap(),
        );
        let err = ContentError::SectionNotFound { path, total: 3 };

        assert_eq!(err.code(), ErrorCode::SectionNotFound);
        assert_eq!(err.recovery_path().as_deref(), Some("/composition/corrective"));
        assert_eq!(
            err.to_string(),
            "Section not found: /composition/corrective/composition/1/section/99 (composition has 3 sections)"
        );
    }

    #[test]
    fn load_errors_map_to_content_codes() {
        let err = ContentError::from(LoadError::malformed("a.json", "bad"));
        assert_eq!(err.code(), ErrorCode::ContentMalformed);

        let err = ContentError::from(LoadError::request("down"));
        assert_eq!(err.code(), ErrorCode::ContentUnavailable);
        assert!(err.recovery_path().is_none());
    }
}
