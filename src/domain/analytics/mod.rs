//! Analytics module - page views and their aggregation.

mod page_view;
mod view_counts;

pub use page_view::{PageView, MAX_PATH_LEN};
pub use view_counts::{CountWindows, ViewCounts};
