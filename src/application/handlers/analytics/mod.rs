//! Page-view analytics handlers.

mod get_view_counts;
mod record_page_view;

pub use get_view_counts::GetViewCountsHandler;
pub use record_page_view::{RecordOutcome, RecordPageViewCommand, RecordPageViewHandler};
