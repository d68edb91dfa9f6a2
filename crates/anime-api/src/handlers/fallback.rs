//! Handlers for unmatched routes and methods.

use axum::http::{Method, StatusCode, Uri};

use anime_core::error::AppError;

use crate::error::ApiError;

/// Answers unknown paths with the standard not-found body.
pub async fn not_found(uri: Uri) -> ApiError {
    AppError::not_found(format!("no route for {}", uri.path())).into()
}

/// Answers known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::http(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("method {method} not allowed on {}", uri.path()),
    )
}
