//! Route definitions for the anime HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with every route, without the outer middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(anime_routes())
        .merge(health_routes())
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .with_state(state)
}

/// Anime endpoints: list, get, create, batch create, replace, delete
fn anime_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/animes",
            get(handlers::anime::list_animes).post(handlers::anime::create_anime),
        )
        .route("/animes/batch", post(handlers::anime::create_animes))
        .route(
            "/animes/{id}",
            get(handlers::anime::get_anime)
                .put(handlers::anime::update_anime)
                .delete(handlers::anime::delete_anime),
        )
}

/// Health endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
