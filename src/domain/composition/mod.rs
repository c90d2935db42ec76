//! Composition module - the reading content model.
//!
//! - `Section` / `Composition` - authored content with three reading tiers
//! - `Catalog` - compositions partitioned into collection buckets
//! - `resolve` - reading-level selection with intermediate fallback
//! - `SectionNavigator` - ordinal arithmetic and previous/next
//! - `featured_sections` - cross-collection featured surface

mod composition;
mod featured;
mod navigator;
mod reading_path;
mod resolver;
mod section;

pub use composition::{Catalog, Composition};
pub use featured::{featured_sections, FeaturedSection};
pub use navigator::{SectionNavigator, SectionNotFound, SectionPosition};
pub use reading_path::ReadingPath;
pub use resolver::{resolve, ResolvedContent, LEVEL_UNAVAILABLE_NOTICE};
pub use section::Section;
