//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the reading site.

mod collection_type;
mod errors;
mod ids;
mod ordinals;
mod reading_level;

pub use collection_type::CollectionType;
pub use errors::{ErrorCode, ValidationError};
pub use ids::PageViewId;
pub use ordinals::{CompositionOrdinal, SectionOrdinal};
pub use reading_level::ReadingLevel;
