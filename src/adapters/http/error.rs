//! Error responses shared by every HTTP endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::application::ContentError;
use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ContentError> for ApiError {
    fn from(error: ContentError) -> Self {
        let code = error.code();
        let status = if code.is_not_found() {
            StatusCode::NOT_FOUND
        } else if code == ErrorCode::ValidationFailed {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!(error = %error, "Content unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        };

        let message = match &error {
            ContentError::Load(_) => "Failed to load content".to_string(),
            other => other.to_string(),
        };

        let mut body = ErrorResponse::new(code, message);
        if let Some(path) = error.recovery_path() {
            body = body.with_details(serde_json::json!({ "collection_path": path }));
        }

        ApiError { status, body }
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ContentError::Validation(error).into()
    }
}
