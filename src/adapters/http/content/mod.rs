//! Content HTTP adapter module.
//!
//! Provides REST endpoints for collections, sections and featured content.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::ContentAppState;
pub use routes::content_routes;
