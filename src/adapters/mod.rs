//! Adapters - implementations of ports and the HTTP surface.

pub mod analytics;
pub mod content;
pub mod http;
