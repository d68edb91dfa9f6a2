//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod error_path;
pub mod logging;
pub mod timeout;
