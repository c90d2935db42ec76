//! Domain layer containing the reading content model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (collections, levels, ordinals, errors)
//! - `composition` - Compositions, sections, navigation, featured aggregation
//! - `analytics` - Page views and view-count windows

pub mod analytics;
pub mod composition;
pub mod foundation;
