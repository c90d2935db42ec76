//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analytics;
pub mod content;

pub use analytics::{
    GetViewCountsHandler, RecordOutcome, RecordPageViewCommand, RecordPageViewHandler,
};
pub use content::{
    CollectionListing, CompositionSummary, ContentError, GetFeaturedSectionsHandler,
    GetSectionHandler, GetSectionQuery, ListCollectionHandler, ListCollectionQuery,
    RefreshContentHandler, RefreshSummary, SectionView, TableOfContentsEntry,
};
