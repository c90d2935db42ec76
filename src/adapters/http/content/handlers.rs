//! HTTP handlers for content endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, Query, State};

use super::dto::{
    CollectionListing, FeaturedSectionResponse, RefreshSummary, SectionParams, SectionView,
};
use crate::adapters::http::ApiError;
use crate::application::{
    ContentError, ContentStore, GetFeaturedSectionsHandler, GetSectionHandler, GetSectionQuery,
    ListCollectionHandler, ListCollectionQuery, RefreshContentHandler,
};
use crate::domain::composition::ReadingPath;
use crate::domain::foundation::CollectionType;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for content endpoints.
#[derive(Clone)]
pub struct ContentAppState {
    pub store: Arc<ContentStore>,
}

impl ContentAppState {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub fn list_collection_handler(&self) -> ListCollectionHandler {
        ListCollectionHandler::new(self.store.clone())
    }

    pub fn get_section_handler(&self) -> GetSectionHandler {
        GetSectionHandler::new(self.store.clone())
    }

    pub fn featured_sections_handler(&self) -> GetFeaturedSectionsHandler {
        GetFeaturedSectionsHandler::new(self.store.clone())
    }

    pub fn refresh_handler(&self) -> RefreshContentHandler {
        RefreshContentHandler::new(self.store.clone())
    }
}

fn parse_collection(slug: &str) -> Result<CollectionType, ContentError> {
    CollectionType::parse(slug).ok_or_else(|| ContentError::CollectionNotFound(slug.to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/collections/:collection
pub async fn get_collection(
    State(state): State<ContentAppState>,
    Path(collection): Path<String>,
) -> Result<Json<CollectionListing>, ApiError> {
    let collection = parse_collection(&collection)?;

    let listing = state
        .list_collection_handler()
        .handle(ListCollectionQuery { collection })
        .await?;

    Ok(Json(listing))
}

/// GET /api/composition/:collection/composition/:composition/section/:section?level=N
pub async fn get_section(
    State(state): State<ContentAppState>,
    Path((collection, composition, section)): Path<(String, String, String)>,
    Query(params): Query<SectionParams>,
) -> Result<Json<SectionView>, ApiError> {
    let path = ReadingPath::new(
        parse_collection(&collection)?,
        composition.parse()?,
        section.parse()?,
    );
    let level = params.reading_level()?;

    let view = state
        .get_section_handler()
        .handle(GetSectionQuery { path, level })
        .await?;

    Ok(Json(view))
}

/// GET /api/featured
pub async fn get_featured_sections(
    State(state): State<ContentAppState>,
) -> Result<Json<Vec<FeaturedSectionResponse>>, ApiError> {
    let featured = state.featured_sections_handler().handle().await?;
    Ok(Json(featured.into_iter().map(Into::into).collect()))
}

/// POST /api/content/refresh
pub async fn refresh_content(
    State(state): State<ContentAppState>,
) -> Result<Json<RefreshSummary>, ApiError> {
    let summary = state.refresh_handler().handle().await?;
    Ok(Json(summary))
}
