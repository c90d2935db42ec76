//! A single recorded page view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PageViewId, ValidationError};

/// Longest path accepted for recording.
pub const MAX_PATH_LEN: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageView {
    pub id: PageViewId,
    pub path: String,
    pub viewed_at: DateTime<Utc>,
}

impl PageView {
    /// Creates a page view stamped with the current time.
    pub fn new(path: impl Into<String>) -> Result<Self, ValidationError> {
        Self::at(path, Utc::now())
    }

    /// Creates a page view at a specific instant.
    pub fn at(path: impl Into<String>, viewed_at: DateTime<Utc>) -> Result<Self, ValidationError> {
        let path = path.into();
        let trimmed = path.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("path"));
        }
        if !trimmed.starts_with('/') {
            return Err(ValidationError::invalid_format("path", "must start with '/'"));
        }
        if trimmed.len() > MAX_PATH_LEN {
            return Err(ValidationError::out_of_range(
                "path",
                1,
                MAX_PATH_LEN as i64,
                trimmed.len() as i64,
            ));
        }

        Ok(Self {
            id: PageViewId::new(),
            path: trimmed.to_string(),
            viewed_at,
        })
    }
}
