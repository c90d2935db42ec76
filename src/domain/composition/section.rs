//! Section - one addressable unit of content inside a composition.

use serde::Serialize;

use crate::domain::foundation::{ReadingLevel, ValidationError};

/// One content unit with three parallel reading-level variants.
///
/// Level 3 is required and non-blank; levels 1 and 5 are optional
/// simplifications and elaborations of the same material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_level_1: Option<String>,
    content_level_3: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_level_5: Option<String>,
}

impl Section {
    /// Creates a section from its required intermediate-level content.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if `content_level_3` is blank.
    pub fn new(
        title: impl Into<String>,
        content_level_3: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let content_level_3 = content_level_3.into();
        if content_level_3.trim().is_empty() {
            return Err(ValidationError::empty_field("content_level_3"));
        }

        Ok(Self {
            title: title.into(),
            featured: false,
            content_level_1: None,
            content_level_3,
            content_level_5: None,
        })
    }

    /// Sets the basic-level variant. Blank text counts as absent.
    pub fn with_basic(mut self, markdown: impl Into<String>) -> Self {
        self.content_level_1 = non_blank(markdown.into());
        self
    }

    /// Sets the advanced-level variant. Blank text counts as absent.
    pub fn with_advanced(mut self, markdown: impl Into<String>) -> Self {
        self.content_level_5 = non_blank(markdown.into());
        self
    }

    /// Marks the section for the featured surface.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    /// The canonical intermediate-level content, always present.
    pub fn intermediate(&self) -> &str {
        &self.content_level_3
    }

    /// Returns the raw tier for `level`, or `None` when that tier is absent.
    pub fn content_for(&self, level: ReadingLevel) -> Option<&str> {
        match level {
            ReadingLevel::Basic => self.content_level_1.as_deref(),
            ReadingLevel::Intermediate => Some(&self.content_level_3),
            ReadingLevel::Advanced => self.content_level_5.as_deref(),
        }
    }

    /// Levels with content, in selector order.
    pub fn available_levels(&self) -> Vec<ReadingLevel> {
        ReadingLevel::STEPS
            .into_iter()
            .filter(|level| self.content_for(*level).is_some())
            .collect()
    }
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
