//! GetSectionHandler - Query handler for reading one section.
//!
//! Resolves the reading path to a section, picks the markdown for the
//! requested reading level and computes the navigation around it.

use serde::Serialize;
use std::sync::Arc;

use super::ContentError;
use crate::application::ContentStore;
use crate::domain::composition::{resolve, ReadingPath, SectionNavigator, SectionPosition};
use crate::domain::foundation::{CollectionType, ReadingLevel, SectionOrdinal};

/// Query for a single section at a reading level.
#[derive(Debug, Clone)]
pub struct GetSectionQuery {
    pub path: ReadingPath,
    pub level: ReadingLevel,
}

/// Sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableOfContentsEntry {
    pub ordinal: SectionOrdinal,
    pub title: String,
    pub path: String,
    pub current: bool,
}

/// Everything the reader page needs for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub path: String,
    pub collection: CollectionType,
    pub collection_title: String,
    pub composition_title: String,
    pub section_title: String,
    pub markdown: String,
    pub requested_level: ReadingLevel,
    pub served_level: ReadingLevel,
    pub available_levels: Vec<ReadingLevel>,
    /// Set when the requested level had no content and intermediate was served.
    pub notice: Option<String>,
    pub position: SectionPosition,
    pub position_label: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub contents: Vec<TableOfContentsEntry>,
}

pub struct GetSectionHandler {
    store: Arc<ContentStore>,
}

impl GetSectionHandler {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetSectionQuery) -> Result<SectionView, ContentError> {
        let catalog = self.store.ensure_loaded().await?;
        let path = query.path;

        let composition = catalog
            .composition(path.collection, path.composition)
            .ok_or(ContentError::CompositionNotFound {
                collection: path.collection,
                ordinal: path.composition,
            })?;

        let navigator = SectionNavigator::new(composition);
        let section = navigator
            .section(path.section)
            .map_err(|e| ContentError::SectionNotFound {
                path,
                total: e.total,
            })?;
        let position = navigator
            .position(path.section)
            .map_err(|e| ContentError::SectionNotFound {
                path,
                total: e.total,
            })?;

        let resolved = resolve(section, query.level);

        let contents = navigator
            .table_of_contents()
            .into_iter()
            .map(|(ordinal, title)| TableOfContentsEntry {
                ordinal,
                title: title.to_string(),
                path: path.with_section(ordinal).to_string(),
                current: ordinal == path.section,
            })
            .collect();

        Ok(SectionView {
            path: path.to_string(),
            collection: path.collection,
            collection_title: path.collection.display_title().to_string(),
            composition_title: composition.title().to_string(),
            section_title: section.title().to_string(),
            markdown: resolved.markdown.to_string(),
            requested_level: resolved.requested,
            served_level: resolved.served,
            available_levels: section.available_levels(),
            notice: resolved.notice().map(str::to_string),
            position,
            position_label: position.to_string(),
            previous: navigator
                .previous(path.section)
                .map(|ordinal| path.with_section(ordinal).to_string()),
            next: navigator
                .next(path.section)
                .map(|ordinal| path.with_section(ordinal).to_string()),
            contents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::InMemoryCompositionLoader;
    use crate::domain::composition::{Composition, Section, LEVEL_UNAVAILABLE_NOTICE};
    use crate::domain::foundation::CompositionOrdinal;

    fn handler() -> GetSectionHandler {
        let compositions = vec![Composition::new(
            0,
            "Test",
            CollectionType::Memorandum,
            vec![
                Section::new("Intro", "# Hi").unwrap().featured(true),
                Section::new("Middle", "Middle text")
                    .unwrap()
                    .with_basic("Simple middle")
                    .with_advanced("Dense middle"),
                Section::new("End", "Closing").unwrap(),
            ],
        )
        .unwrap()];

        let store = Arc::new(ContentStore::new(Arc::new(InMemoryCompositionLoader::new(
            compositions,
        ))));
        GetSectionHandler::new(store)
    }

    fn query(composition: usize, section: usize, level: ReadingLevel) -> GetSectionQuery {
        GetSectionQuery {
            path: ReadingPath::new(
                CollectionType::Memorandum,
                CompositionOrdinal::new(composition).unwrap(),
                SectionOrdinal::new(section).unwrap(),
            ),
            level,
        }
    }

    #[tokio::test]
    async fn test_falls_back_with_notice_when_level_missing() {
        let view = handler()
            .handle(query(1, 1, ReadingLevel::Basic))
            .await
            .unwrap();

        assert_eq!(view.markdown, "# Hi");
        assert_eq!(view.requested_level, ReadingLevel::Basic);
        assert_eq!(view.served_level, ReadingLevel::Intermediate);
        assert_eq!(view.notice.as_deref(), Some(LEVEL_UNAVAILABLE_NOTICE));
        assert_eq!(view.available_levels, vec![ReadingLevel::Intermediate]);
    }

    #[tokio::test]
    async fn test_serves_requested_level_when_present() {
        let view = handler()
            .handle(query(1, 2, ReadingLevel::Advanced))
            .await
            .unwrap();

        assert_eq!(view.markdown, "Dense middle");
        assert_eq!(view.served_level, ReadingLevel::Advanced);
        assert_eq!(view.notice, None);
    }

    #[tokio::test]
    async fn test_navigation_links() {
        let handler = handler();

        let first = handler.handle(query(1, 1, ReadingLevel::Intermediate)).await.unwrap();
        assert_eq!(first.previous, None);
        assert_eq!(
            first.next.as_deref(),
            Some("/composition/memorandum/composition/1/section/2")
        );
        assert_eq!(first.position_label, "Section 1 of 3");

        let last = handler.handle(query(1, 3, ReadingLevel::Intermediate)).await.unwrap();
        assert_eq!(last.next, None);
        assert_eq!(
            last.previous.as_deref(),
            Some("/composition/memorandum/composition/1/section/2")
        );
    }

    #[tokio::test]
    async fn test_table_of_contents_marks_current_section() {
        let view = handler()
            .handle(query(1, 2, ReadingLevel::Intermediate))
            .await
            .unwrap();

        let current: Vec<&str> = view
            .contents
            .iter()
            .filter(|entry| entry.current)
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(current, vec!["Middle"]);
        assert_eq!(view.contents.len(), 3);
    }

    #[tokio::test]
    async fn test_section_out_of_range_is_not_found() {
        let result = handler().handle(query(1, 99, ReadingLevel::Intermediate)).await;

        match result {
            Err(ContentError::SectionNotFound { total, .. }) => assert_eq!(total, 3),
            other => panic!("Expected SectionNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_composition_out_of_range_is_not_found() {
        let result = handler().handle(query(5, 1, ReadingLevel::Intermediate)).await;
        assert!(matches!(result, Err(ContentError::CompositionNotFound { .. })));
    }
}
