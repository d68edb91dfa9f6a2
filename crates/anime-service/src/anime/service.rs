//! Anime CRUD orchestration.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use anime_core::error::AppError;
use anime_core::result::AppResult;
use anime_core::traits::Repository;
use anime_entity::Anime;

/// Handles anime lookups, creation, replacement, and deletion.
///
/// Only two failures originate here: [`AppError::validation`] for bad or
/// missing input and [`AppError::not_found`] for unknown identifiers.
/// Both are returned untouched to the caller.
#[derive(Clone)]
pub struct AnimeService {
    /// Anime repository.
    anime_repo: Arc<dyn Repository<Anime, Uuid>>,
}

impl AnimeService {
    /// Creates a new anime service.
    pub fn new(anime_repo: Arc<dyn Repository<Anime, Uuid>>) -> Self {
        Self { anime_repo }
    }

    /// Lists every anime.
    pub async fn find_all(&self) -> AppResult<Vec<Anime>> {
        self.anime_repo.find_all().await
    }

    /// Gets a single anime, failing when the id is absent or unknown.
    pub async fn find_by_id(&self, id: impl Into<Option<Uuid>>) -> AppResult<Anime> {
        let id = id
            .into()
            .ok_or_else(|| AppError::validation("id should not be null"))?;

        self.anime_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("could not find anime with id {id}")))
    }

    /// Validates and stores a new anime, returning it with its identifier.
    pub async fn save(&self, anime: Anime) -> AppResult<Anime> {
        validate(&anime)?;

        let saved = self.anime_repo.save(anime).await?;
        info!(anime_id = ?saved.id, "Anime saved");
        Ok(saved)
    }

    /// Validates every anime before storing any, then stores them as one batch.
    pub async fn save_all(&self, animes: Vec<Anime>) -> AppResult<Vec<Anime>> {
        for anime in &animes {
            validate(anime)?;
        }

        let saved = self.anime_repo.save_all(animes).await?;
        info!(count = saved.len(), "Anime batch saved");
        Ok(saved)
    }

    /// Replaces an existing anime wholesale.
    pub async fn update(&self, anime: Anime) -> AppResult<()> {
        let id = anime
            .id
            .ok_or_else(|| AppError::validation("id should not be null"))?;
        validate(&anime)?;

        self.find_by_id(id).await?;
        self.anime_repo.save(anime).await?;

        info!(anime_id = %id, "Anime updated");
        Ok(())
    }

    /// Deletes an existing anime.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let anime = self.find_by_id(id).await?;
        self.anime_repo.delete(anime).await?;

        info!(anime_id = %id, "Anime deleted");
        Ok(())
    }
}

impl std::fmt::Debug for AnimeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimeService").finish_non_exhaustive()
    }
}

/// Fails with the first violated constraint, if any.
fn validate(anime: &Anime) -> AppResult<()> {
    match anime.violations().into_iter().next() {
        Some(message) => {
            debug!(name = %anime.name, %message, "Rejected invalid anime");
            Err(AppError::validation(message))
        }
        None => Ok(()),
    }
}
