//! Section navigation within a composition.
//!
//! Every 1-based section ordinal coming from a URL is turned into a slice
//! index here and nowhere else.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::{Composition, Section};
use crate::domain::foundation::SectionOrdinal;

/// Requested section ordinal is past the end of the composition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Section {ordinal} not found (composition has {total} sections)")]
pub struct SectionNotFound {
    pub ordinal: SectionOrdinal,
    pub total: usize,
}

/// "Section N of M".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionPosition {
    pub ordinal: SectionOrdinal,
    pub total: usize,
}

impl fmt::Display for SectionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section {} of {}", self.ordinal, self.total)
    }
}

/// Computes previous/next ordinals and resolves ordinals to sections.
#[derive(Debug, Clone, Copy)]
pub struct SectionNavigator<'a> {
    sections: &'a [Section],
}

impl<'a> SectionNavigator<'a> {
    pub fn new(composition: &'a Composition) -> Self {
        Self {
            sections: composition.sections(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section at `ordinal`.
    pub fn section(&self, ordinal: SectionOrdinal) -> Result<&'a Section, SectionNotFound> {
        self.sections.get(ordinal.index()).ok_or(SectionNotFound {
            ordinal,
            total: self.sections.len(),
        })
    }

    /// Where `ordinal` sits in the composition.
    pub fn position(&self, ordinal: SectionOrdinal) -> Result<SectionPosition, SectionNotFound> {
        self.section(ordinal)?;
        Ok(SectionPosition {
            ordinal,
            total: self.sections.len(),
        })
    }

    /// The following ordinal, or `None` on the last section.
    pub fn next(&self, ordinal: SectionOrdinal) -> Option<SectionOrdinal> {
        if ordinal.get() < self.sections.len() {
            SectionOrdinal::new(ordinal.get() + 1).ok()
        } else {
            None
        }
    }

    /// The preceding ordinal, or `None` on the first section.
    pub fn previous(&self, ordinal: SectionOrdinal) -> Option<SectionOrdinal> {
        if ordinal.get() > 1 {
            SectionOrdinal::new(ordinal.get() - 1).ok()
        } else {
            None
        }
    }

    /// Ordinal and title of every section, in navigation order.
    pub fn table_of_contents(&self) -> Vec<(SectionOrdinal, &'a str)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| (SectionOrdinal::from_index(index), section.title()))
            .collect()
    }
}
