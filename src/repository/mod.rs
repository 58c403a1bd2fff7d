//! # Repository
//!
//! The storage abstraction services depend on. Callers hold a `Repository<T>` and
//! never learn which backing store answers, so the store task and the shared map
//! can be swapped without touching them.
//!
//! Two implementations ship with the crate:
//!
//! - [`StoreClient`] - talks to a [`StoreActor`](crate::framework::StoreActor) task.
//! - [`SharedMapRepository`] - a map behind a `tokio::sync::RwLock`, no task needed.

mod shared_map;

pub use shared_map::SharedMapRepository;

use crate::framework::{StoreClient, StoreEntity, StoreError};
use async_trait::async_trait;

/// Keyed CRUD access to entities of type `T`.
///
/// Absence is never an error: lookups return `Option` and deletes of missing ids
/// succeed. The only failure is an unreachable store.
#[async_trait]
pub trait Repository<T: StoreEntity>: Send + Sync {
    /// Inserts `entity` when it has no id (assigning one), otherwise overwrites the
    /// record at its id. Returns the stored record.
    async fn save(&self, entity: T) -> Result<T, StoreError>;

    /// Fetches the record for `id`, if any.
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError>;

    /// Every stored record, ordered by id.
    async fn find_all(&self) -> Result<Vec<T>, StoreError>;

    /// Overwrites the record at `id` only if it exists. Returns the stored record.
    async fn replace(&self, id: T::Id, entity: T) -> Result<Option<T>, StoreError>;

    /// Removes the record for `id`. Returns `false` when there was nothing to remove.
    async fn delete_by_id(&self, id: T::Id) -> Result<bool, StoreError>;

    /// Whether a record exists for `id`.
    async fn exists_by_id(&self, id: T::Id) -> Result<bool, StoreError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for StoreClient<T> {
    async fn save(&self, entity: T) -> Result<T, StoreError> {
        StoreClient::save(self, entity).await
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        StoreClient::find_by_id(self, id).await
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        StoreClient::find_all(self).await
    }

    async fn replace(&self, id: T::Id, entity: T) -> Result<Option<T>, StoreError> {
        StoreClient::replace(self, id, entity).await
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<bool, StoreError> {
        StoreClient::delete_by_id(self, id).await
    }
}
