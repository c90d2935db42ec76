//! RecordPageViewHandler - best-effort page-view recording.
//!
//! Analytics must never block or fail content rendering: invalid paths and
//! store failures are logged and swallowed.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analytics::PageView;
use crate::ports::PageViewRecorder;

#[derive(Debug, Clone)]
pub struct RecordPageViewCommand {
    pub path: String,
}

/// Outcome of a recording attempt, for logging and tests only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    Rejected,
    Failed,
}

pub struct RecordPageViewHandler {
    recorder: Arc<dyn PageViewRecorder>,
}

impl RecordPageViewHandler {
    pub fn new(recorder: Arc<dyn PageViewRecorder>) -> Self {
        Self { recorder }
    }

    pub async fn handle(&self, cmd: RecordPageViewCommand) -> RecordOutcome {
        let view = match PageView::new(cmd.path) {
            Ok(view) => view,
            Err(e) => {
                warn!(error = %e, "Rejected page view");
                return RecordOutcome::Rejected;
            }
        };

        match self.recorder.record(&view).await {
            Ok(()) => {
                debug!(path = %view.path, "Page view recorded");
                RecordOutcome::Recorded
            }
            Err(e) => {
                warn!(path = %view.path, error = %e, "Error recording page view");
                RecordOutcome::Failed
            }
        }
    }

    /// Records on a background task and returns immediately.
    pub fn spawn(self: &Arc<Self>, cmd: RecordPageViewCommand) {
        let handler = Arc::clone(self);
        tokio::spawn(async move {
            handler.handle(cmd).await;
        });
    }
}
