//! Anime domain entities.

pub mod model;
pub mod validation;

pub use model::Anime;
