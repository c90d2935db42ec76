//! HTTP middleware.

pub mod page_views;

pub use page_views::{page_view_middleware, PageViewState};
