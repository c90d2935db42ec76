//! Composition Site - content backend for a long-form reading site
//!
//! Serves two collections of compositions (memorandum and corrective), each
//! made of ordered sections available at up to three reading levels. Also
//! aggregates featured sections and records page-view analytics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
