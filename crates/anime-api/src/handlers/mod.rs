//! Route handlers organized by domain.

pub mod anime;
pub mod fallback;
pub mod health;
