//! Anime repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use anime_core::error::{AppError, ErrorKind};
use anime_core::result::AppResult;
use anime_core::traits::Repository;
use anime_entity::Anime;

const UPSERT: &str = "INSERT INTO anime (id, name) VALUES ($1, $2) \
     ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name \
     RETURNING id, name";

/// PostgreSQL-backed repository for the `anime` table.
#[derive(Debug, Clone)]
pub struct AnimeRepository {
    pool: PgPool,
}

impl AnimeRepository {
    /// Create a new anime repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Anime, Uuid> for AnimeRepository {
    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        sqlx::query_as::<_, Anime>(
            "SELECT id, name FROM anime ORDER BY name COLLATE \"C\" ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list anime", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Anime>> {
        sqlx::query_as::<_, Anime>("SELECT id, name FROM anime WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find anime", e))
    }

    async fn save(&self, entity: Anime) -> AppResult<Anime> {
        let anime = entity.with_generated_id();

        sqlx::query_as::<_, Anime>(UPSERT)
            .bind(anime.id)
            .bind(&anime.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save anime", e))
    }

    async fn save_all(&self, entities: Vec<Anime>) -> AppResult<Vec<Anime>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            let anime = entity.with_generated_id();
            let row = sqlx::query_as::<_, Anime>(UPSERT)
                .bind(anime.id)
                .bind(&anime.name)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to save anime batch", e)
                })?;
            saved.push(row);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit anime batch", e)
        })?;

        debug!(count = saved.len(), "Saved anime batch");
        Ok(saved)
    }

    async fn delete(&self, entity: Anime) -> AppResult<()> {
        let Some(id) = entity.id else {
            return Ok(());
        };

        sqlx::query("DELETE FROM anime WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete anime", e))?;
        Ok(())
    }
}
