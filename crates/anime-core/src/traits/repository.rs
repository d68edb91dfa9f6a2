//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic async CRUD repository trait.
///
/// Lookups that match nothing return `Ok(None)` or an empty `Vec`, never
/// an error; deciding whether absence is a failure is left to callers.
/// `save` is an upsert: entities without an identifier are inserted under
/// a freshly generated one, entities with an identifier replace the
/// stored row.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Fetch every stored entity.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Insert or replace an entity and return the stored version.
    async fn save(&self, entity: Entity) -> AppResult<Entity>;

    /// Insert or replace a batch of entities as one unit.
    async fn save_all(&self, entities: Vec<Entity>) -> AppResult<Vec<Entity>>;

    /// Delete the stored row matching this entity.
    async fn delete(&self, entity: Entity) -> AppResult<()>;
}
