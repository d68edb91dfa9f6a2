//! Store that dispatches to the configured persistence provider.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use anime_core::config::{DatabaseConfig, DatabaseProvider};
use anime_core::result::AppResult;
use anime_core::traits::Repository;
use anime_entity::Anime;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;
use crate::repositories::{AnimeRepository, MemoryAnimeRepository};

/// Shared handle to whichever anime repository is configured.
pub type DynAnimeRepository = Arc<dyn Repository<Anime, Uuid>>;

/// Persistence handle selected at construction time from configuration.
#[derive(Clone)]
pub struct AnimeStore {
    /// The repository handed to services.
    repository: DynAnimeRepository,
    /// The PostgreSQL pool, when that provider is active.
    pool: Option<DatabasePool>,
}

impl AnimeStore {
    /// Connect the configured provider, applying migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            DatabaseProvider::Postgres => {
                info!("Initializing PostgreSQL anime store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                let repository = Arc::new(AnimeRepository::new(pool.pool().clone()));
                Ok(Self {
                    repository,
                    pool: Some(pool),
                })
            }
            DatabaseProvider::Memory => {
                info!("Initializing in-memory anime store");
                Ok(Self::in_memory())
            }
        }
    }

    /// Create a store over a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(MemoryAnimeRepository::new()))
    }

    /// Create a store from an existing repository (for testing).
    pub fn from_repository(repository: DynAnimeRepository) -> Self {
        Self {
            repository,
            pool: None,
        }
    }

    /// The repository handed to services.
    pub fn repository(&self) -> DynAnimeRepository {
        Arc::clone(&self.repository)
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &'static str {
        match self.pool {
            Some(_) => "postgres",
            None => "memory",
        }
    }

    /// Check backend connectivity. The in-memory provider is always up.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

impl std::fmt::Debug for AnimeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimeStore")
            .field("provider", &self.provider_name())
            .finish()
    }
}
