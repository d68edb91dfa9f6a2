//! In-memory anime repository.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use anime_core::result::AppResult;
use anime_core::traits::Repository;
use anime_entity::Anime;

/// Process-local anime store backed by a concurrent map.
///
/// Mirrors the PostgreSQL repository's contract, including listing order:
/// name by byte value (the `"C"` collation), then id.
#[derive(Debug, Default)]
pub struct MemoryAnimeRepository {
    rows: DashMap<Uuid, Anime>,
}

impl MemoryAnimeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn upsert(&self, entity: Anime) -> Anime {
        let anime = entity.with_generated_id();
        if let Some(id) = anime.id {
            self.rows.insert(id, anime.clone());
        }
        anime
    }
}

#[async_trait]
impl Repository<Anime, Uuid> for MemoryAnimeRepository {
    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        let mut all: Vec<Anime> = self.rows.iter().map(|row| row.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Anime>> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn save(&self, entity: Anime) -> AppResult<Anime> {
        Ok(self.upsert(entity))
    }

    async fn save_all(&self, entities: Vec<Anime>) -> AppResult<Vec<Anime>> {
        Ok(entities.into_iter().map(|e| self.upsert(e)).collect())
    }

    async fn delete(&self, entity: Anime) -> AppResult<()> {
        if let Some(id) = entity.id {
            self.rows.remove(&id);
        }
        Ok(())
    }
}
