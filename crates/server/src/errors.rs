use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponseBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub path: String,
}

/// Handler error rendered as an [`ErrorResponseBody`].
/// Carries the request path because the body reports it.
#[derive(Debug, Error)]
#[error("{status}: {message}")]
pub struct ApiError {
    status: StatusCode,
    message: String,
    path: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self { status, message: message.into(), path: path.into() }
    }

    pub fn bad_request(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, path)
    }

    pub fn from_service(err: ServiceError, path: impl Into<String>) -> Self {
        match err {
            ServiceError::Validation(v) => Self::bad_request(v.to_string(), path),
        }
    }

    #[cfg(test)]
    fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), path = %self.path, error = %self.message, "request failed");
        } else {
            warn!(status = self.status.as_u16(), path = %self.path, error = %self.message, "request rejected");
        }
        let body = ErrorResponseBody {
            timestamp: Utc::now(),
            status: self.status.as_u16(),
            error: self.message,
            path: self.path,
        };
        (self.status, Json(body)).into_response()
    }
}
