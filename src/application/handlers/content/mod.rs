//! Content query and command handlers.

mod error;
mod get_featured_sections;
mod get_section;
mod list_collection;
mod refresh_content;

pub use error::ContentError;
pub use get_featured_sections::GetFeaturedSectionsHandler;
pub use get_section::{GetSectionHandler, GetSectionQuery, SectionView, TableOfContentsEntry};
pub use list_collection::{
    CollectionListing, CompositionSummary, ListCollectionHandler, ListCollectionQuery,
};
pub use refresh_content::{RefreshContentHandler, RefreshSummary};
