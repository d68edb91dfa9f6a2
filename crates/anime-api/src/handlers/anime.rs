//! Anime CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use anime_entity::Anime;

use crate::error::ApiError;
use crate::extractors::{AppJson, UuidPath};
use crate::state::AppState;

/// GET /animes
pub async fn list_animes(State(state): State<AppState>) -> Result<Json<Vec<Anime>>, ApiError> {
    let animes = state.anime_service.find_all().await?;
    Ok(Json(animes))
}

/// GET /animes/{id}
pub async fn get_anime(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> Result<Json<Anime>, ApiError> {
    let anime = state.anime_service.find_by_id(id).await?;
    Ok(Json(anime))
}

/// POST /animes
pub async fn create_anime(
    State(state): State<AppState>,
    AppJson(anime): AppJson<Anime>,
) -> Result<(StatusCode, Json<Anime>), ApiError> {
    let saved = state.anime_service.save(anime).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// POST /animes/batch
pub async fn create_animes(
    State(state): State<AppState>,
    AppJson(animes): AppJson<Vec<Anime>>,
) -> Result<(StatusCode, Json<Vec<Anime>>), ApiError> {
    let saved = state.anime_service.save_all(animes).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /animes/{id}
///
/// The path id wins over any id in the body.
pub async fn update_anime(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    AppJson(anime): AppJson<Anime>,
) -> Result<StatusCode, ApiError> {
    state.anime_service.update(anime.with_id(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /animes/{id}
pub async fn delete_anime(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> Result<StatusCode, ApiError> {
    state.anime_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
