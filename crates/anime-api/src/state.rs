//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use anime_core::config::AppConfig;
use anime_database::AnimeStore;
use anime_service::AnimeService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Persistence handle (PostgreSQL or in-memory)
    pub store: AnimeStore,
    /// Anime service
    pub anime_service: Arc<AnimeService>,
    /// When the server started, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Wire the service layer on top of the given store.
    pub fn new(config: AppConfig, store: AnimeStore) -> Self {
        let anime_service = Arc::new(AnimeService::new(store.repository()));

        Self {
            config: Arc::new(config),
            store,
            anime_service,
            started_at: Instant::now(),
        }
    }
}
