//! Anime catalog operations.

pub mod service;

pub use service::AnimeService;
