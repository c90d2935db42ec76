//! Reading-level resolution with intermediate-level fallback.

use serde::Serialize;

use super::Section;
use crate::domain::foundation::ReadingLevel;

/// Notice shown when the requested tier had no content.
pub const LEVEL_UNAVAILABLE_NOTICE: &str =
    "Content not available at requested level, showing intermediate level instead.";

/// Markdown chosen for a section plus how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedContent<'a> {
    pub markdown: &'a str,
    pub requested: ReadingLevel,
    pub served: ReadingLevel,
    pub substituted: bool,
}

impl ResolvedContent<'_> {
    /// User-facing notice for a substitution, if one happened.
    pub fn notice(&self) -> Option<&'static str> {
        self.substituted.then_some(LEVEL_UNAVAILABLE_NOTICE)
    }
}

/// Returns the tier matching `requested`, or the intermediate tier when that
/// tier is absent.
///
/// The intermediate tier is returned unconditionally on fallback.
pub fn resolve(section: &Section, requested: ReadingLevel) -> ResolvedContent<'_> {
    match section.content_for(requested) {
        Some(markdown) if !markdown.trim().is_empty() => ResolvedContent {
            markdown,
            requested,
            served: requested,
            substituted: false,
        },
        _ => ResolvedContent {
            markdown: section.intermediate(),
            requested,
            served: ReadingLevel::Intermediate,
            substituted: requested != ReadingLevel::Intermediate,
        },
    }
}
