//! # anime-service
//!
//! Business logic service layer for the anime catalog. Services validate
//! input, enforce existence checks, and delegate persistence to a
//! repository.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod anime;

pub use anime::AnimeService;
