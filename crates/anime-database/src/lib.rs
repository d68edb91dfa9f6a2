//! # anime-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the anime catalog, plus an in-memory store for
//! running without a database.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::AnimeStore;
