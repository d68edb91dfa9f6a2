//! # anime-api
//!
//! HTTP API layer for the anime catalog built on Axum.
//!
//! Provides the REST endpoints, middleware (logging, CORS, compression,
//! timeouts), extractors that turn malformed input into validation
//! errors, DTOs, and the error-attribute mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ErrorAttributes};
pub use state::AppState;
