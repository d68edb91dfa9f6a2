//! Core traits defined in `anime-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
