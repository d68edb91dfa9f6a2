//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use anime_api::{AppState, build_app};
use anime_core::config::AppConfig;
use anime_core::result::AppResult;
use anime_core::traits::Repository;
use anime_database::AnimeStore;
use anime_database::repositories::MemoryAnimeRepository;
use anime_entity::Anime;

/// Memory repository that counts writes, so tests can prove a request
/// never reached persistence.
#[derive(Debug, Default)]
pub struct CountingRepository {
    inner: MemoryAnimeRepository,
    saves: AtomicUsize,
    deletes: AtomicUsize,
}

impl CountingRepository {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Repository<Anime, Uuid> for CountingRepository {
    async fn find_all(&self) -> AppResult<Vec<Anime>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Anime>> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, entity: Anime) -> AppResult<Anime> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(entity).await
    }

    async fn save_all(&self, entities: Vec<Anime>) -> AppResult<Vec<Anime>> {
        self.saves.fetch_add(entities.len(), Ordering::SeqCst);
        self.inner.save_all(entities).await
    }

    async fn delete(&self, entity: Anime) -> AppResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(entity).await
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Repository behind the router, for direct inspection
    pub repo: Arc<CountingRepository>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let repo = Arc::new(CountingRepository::default());
        let store = AnimeStore::from_repository(repo.clone());
        let router = build_app(AppState::new(AppConfig::default(), store));

        Self { router, repo }
    }

    /// Insert an anime directly, bypassing the API and the write counters
    pub async fn seed(&self, name: &str) -> Anime {
        self.repo
            .inner
            .save(Anime::new(name))
            .await
            .expect("Failed to seed anime")
    }

    /// Send a request and return status plus parsed JSON body (Null when empty)
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a raw request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Body is not JSON")
        };

        (status, value)
    }
}

/// Asserts the standard error body.
pub fn assert_error_body(body: &Value, status: u16, error: &str, message: &str, path: &str) {
    assert_eq!(body["status"], status);
    assert_eq!(body["error"], error);
    assert_eq!(body["message"], message);
    assert_eq!(body["path"], path);
    assert!(body["timestamp"].is_string(), "timestamp missing: {body}");
}
