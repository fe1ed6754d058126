//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods are defined on the per-entity repository traits.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Find all entities.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Persist a new entity and return it with its assigned identity.
    async fn add(&self, entity: &Entity) -> AppResult<Entity>;

    /// Persist an existing entity's current state and return it.
    async fn update(&self, entity: &Entity) -> AppResult<Entity>;

    /// Remove an entity by its primary key. Returns `true` if removed.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}
