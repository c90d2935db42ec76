//! Application layer - Content store, commands, queries and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read from the shared `ContentStore`; command handlers
//! refresh it or record analytics.

mod content_store;
pub mod handlers;

pub use content_store::ContentStore;
pub use handlers::*;
