//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' does not accept '{value}' (allowed: {allowed})")]
    Unsupported {
        field: String,
        value: String,
        allowed: String,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i64, max: i64, actual: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported value error listing the accepted values.
    pub fn unsupported(
        field: impl Into<String>,
        value: impl Into<String>,
        allowed: impl Into<String>,
    ) -> Self {
        ValidationError::Unsupported {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    CollectionNotFound,
    CompositionNotFound,
    SectionNotFound,

    // Content source errors
    ContentUnavailable,
    ContentMalformed,
}

impl ErrorCode {
    /// Returns true for codes the reader can recover from by navigating elsewhere.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::CollectionNotFound
                | ErrorCode::CompositionNotFound
                | ErrorCode::SectionNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::CollectionNotFound => "COLLECTION_NOT_FOUND",
            ErrorCode::CompositionNotFound => "COMPOSITION_NOT_FOUND",
            ErrorCode::SectionNotFound => "SECTION_NOT_FOUND",
            ErrorCode::ContentUnavailable => "CONTENT_UNAVAILABLE",
            ErrorCode::ContentMalformed => "CONTENT_MALFORMED",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("content_level_3");
        assert_eq!(format!("{}", err), "Field 'content_level_3' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("section", 1, 3, 99);
        assert_eq!(
            format!("{}", err),
            "Field 'section' must be between 1 and 3, got 99"
        );
    }

    #[test]
    fn validation_error_unsupported_lists_allowed_values() {
        let err = ValidationError::unsupported("level", "2", "1, 3, 5");
        assert_eq!(
            format!("{}", err),
            "Field 'level' does not accept '2' (allowed: 1, 3, 5)"
        );
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::SectionNotFound), "SECTION_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::ContentMalformed), "CONTENT_MALFORMED");
    }

    #[test]
    fn not_found_codes_are_classified() {
        assert!(ErrorCode::SectionNotFound.is_not_found());
        assert!(ErrorCode::CompositionNotFound.is_not_found());
        assert!(!ErrorCode::ContentUnavailable.is_not_found());
    }
}
