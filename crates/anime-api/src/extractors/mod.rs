//! Custom Axum extractors.
//!
//! Both extractors reject with [`crate::error::ApiError`] so malformed
//! input produces the standard error body instead of Axum's plain-text
//! rejections.

pub mod json;
pub mod path;

pub use json::AppJson;
pub use path::UuidPath;
