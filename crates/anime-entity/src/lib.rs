//! # anime-entity
//!
//! Domain entity models for the anime catalog. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod anime;

pub use anime::Anime;
