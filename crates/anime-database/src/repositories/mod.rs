//! Repository implementations for catalog entities.

pub mod anime;
pub mod memory;

pub use anime::AnimeRepository;
pub use memory::MemoryAnimeRepository;
