//! Fills the request path into error bodies.

use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ErrorAttributes;

/// Re-renders error responses with the `path` attribute set.
///
/// Handlers only see the failure, not the request, so error bodies leave
/// the path empty and attach their [`ErrorAttributes`] as a response
/// extension. This middleware picks that extension up on the way out.
///
/// Bare error responses produced by inner tower layers (no attributes,
/// no body type), such as the request timeout, get the standard body
/// built from their status.
pub async fn attach_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    if let Some(attributes) = response.extensions().get::<ErrorAttributes>() {
        return attributes.clone().with_path(path).into_response();
    }

    let status = response.status();
    let is_bare = !response.headers().contains_key(CONTENT_TYPE);
    if (status.is_client_error() || status.is_server_error()) && is_bare {
        let reason = status.canonical_reason().unwrap_or("request failed");
        return ErrorAttributes::from_status(status, reason)
            .with_path(path)
            .into_response();
    }

    response
}
