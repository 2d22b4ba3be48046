use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use plv_resolver::{BatchError, ResolveError};

/// Wire-facing failure of an API call.
///
/// Each variant carries the human-readable detail; the summary line and
/// machine code are fixed per variant so clients can match on `code`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidObjectId(String),

    #[error("{0}")]
    InvalidTimestamp(String),

    #[error("{0}")]
    InvalidBatchRequest(String),

    #[error("object with ID '{0}' does not exist")]
    NotFound(String),

    #[error("{0}")]
    Retrieval(String),

    #[error("{0}")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidObjectId(_) | Self::InvalidTimestamp(_) | Self::InvalidBatchRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Retrieval(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidObjectId(_) => "INVALID_OBJECT_ID",
            Self::InvalidTimestamp(_) => "INVALID_TIMESTAMP",
            Self::InvalidBatchRequest(_) => "INVALID_BATCH_REQUEST",
            Self::NotFound(_) => "OBJECT_NOT_FOUND",
            Self::Retrieval(_) => "RETRIEVAL_ERROR",
            Self::Unavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Self::InvalidObjectId(_) => "Invalid object ID format",
            Self::InvalidTimestamp(_) => "Invalid timestamp format",
            Self::InvalidBatchRequest(_) => "Invalid batch request",
            Self::NotFound(_) => "Object not found",
            Self::Retrieval(_) => "Internal server error",
            Self::Unavailable(_) => "Service unavailable",
        }
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NotFound(id) => Self::NotFound(id.to_string()),
            ResolveError::Retrieval { .. } => Self::Retrieval(err.to_string()),
            ResolveError::Infrastructure(message) => Self::Unavailable(message),
        }
    }
}

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        Self::InvalidBatchRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), message = %self, "request failed");
        }
        let body = Json(json!({
            "error": self.summary(),
            "code": self.code(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
