//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CompositionLoader` - content source (files, content API)
//! - `PageViewRecorder` - page-view analytics store

mod composition_loader;
mod page_view_recorder;

pub use composition_loader::{CompositionLoader, LoadError};
pub use page_view_recorder::{AnalyticsError, PageViewRecorder};
