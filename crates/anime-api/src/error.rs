//! Maps domain `AppError` to HTTP error bodies.
//!
//! Every failed request answers with the same JSON shape, whether the
//! failure came from the service layer, request decoding, routing, or a
//! tower layer such as the request timeout:
//!
//! ```json
//! {
//!   "timestamp": "2024-06-01T12:00:00Z",
//!   "path": "/animes/cb349efc-7411-45e0-941e-4514adb14811",
//!   "status": 404,
//!   "error": "Resource Not Found",
//!   "message": "could not find anime with id cb349efc-7411-45e0-941e-4514adb14811"
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use anime_core::error::{AppError, ErrorKind};

/// `error` label for validation failures.
pub const VALIDATION_ERROR: &str = "Service Validation Exception";

/// `error` label for unknown identifiers.
pub const NOT_FOUND_ERROR: &str = "Resource Not Found";

/// Attribute map rendered as the body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAttributes {
    /// When the error was produced.
    pub timestamp: DateTime<Utc>,
    /// Request path, filled in by the `attach_error_path` middleware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// HTTP status code.
    pub status: u16,
    /// Short error label.
    pub error: String,
    /// The failure's own message.
    pub message: String,
}

impl ErrorAttributes {
    /// Build the attributes for a failure.
    ///
    /// Validation and not-found failures get their dedicated status and
    /// label; anything else keeps the generic 500 defaults. `message` is
    /// always the failure's message.
    pub fn from_error(err: &AppError) -> Self {
        let status = match err.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let error = match err.kind {
            ErrorKind::Validation => VALIDATION_ERROR.to_string(),
            ErrorKind::NotFound => NOT_FOUND_ERROR.to_string(),
            _ => status
                .canonical_reason()
                .unwrap_or("Internal Server Error")
                .to_string(),
        };

        Self {
            timestamp: Utc::now(),
            path: None,
            status: status.as_u16(),
            error,
            message: err.message.clone(),
        }
    }

    /// Build the attributes for a failure of the HTTP exchange itself,
    /// labelled with the status's canonical reason.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            path: None,
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown Error").to_string(),
            message: message.into(),
        }
    }

    /// Return a copy carrying the request path.
    pub fn with_path(self, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..self
        }
    }

    /// The HTTP status these attributes describe.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorAttributes {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self.clone())).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

/// HTTP-facing error returned by handlers and extractors.
#[derive(Debug)]
pub enum ApiError {
    /// Failure raised by the service layer or domain rules.
    App(AppError),
    /// Failure of the HTTP exchange (routing, body transport) answered
    /// with its own status.
    Http {
        /// Status to answer with.
        status: StatusCode,
        /// Human-readable reason.
        message: String,
    },
}

impl ApiError {
    /// Create an HTTP-level failure.
    pub fn http(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::App(err) => {
                if err.is_domain() {
                    tracing::debug!(kind = %err.kind, message = %err.message, "Request rejected");
                } else {
                    tracing::error!(kind = %err.kind, error = %err.message, source = ?err.source, "Internal server error");
                }

                ErrorAttributes::from_error(&err).into_response()
            }
            Self::Http { status, message } => {
                tracing::debug!(status = %status.as_u16(), %message, "Request rejected");
                ErrorAttributes::from_status(status, message).into_response()
            }
        }
    }
}
