//! # BaseService Trait
//!
//! Shared CRUD delegation for any service that sits in front of a single
//! [`Repository`]. A concrete service supplies the repository and its own error
//! type; the storage calls, error conversion and tracing come for free.

use crate::framework::{StoreEntity, StoreError};
use crate::repository::Repository;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Trait for entity-specific services to inherit standard CRUD delegation.
///
/// # Example
///
/// ```rust,ignore
/// struct NoteService<R> { repository: R }
///
/// impl<R: Repository<Note>> BaseService<Note> for NoteService<R> {
///     type Error = NoteError;
///     fn repository(&self) -> &dyn Repository<Note> { &self.repository }
/// }
///
/// // find(), find_all(), store(), replace() and remove() are provided.
/// ```
#[async_trait]
pub trait BaseService<T: StoreEntity>: Send + Sync {
    /// The service-specific error type.
    type Error: From<StoreError> + Send;

    /// Access the repository the service delegates to.
    fn repository(&self) -> &dyn Repository<T>;

    /// Save an entity, assigning an id if it has none.
    #[instrument(skip(self))]
    async fn store(&self, entity: T) -> Result<T, Self::Error> {
        debug!("Sending request");
        Ok(self.repository().save(entity).await?)
    }

    /// Fetch an entity by ID.
    #[instrument(skip(self))]
    async fn find(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!("Sending request");
        Ok(self.repository().find_by_id(id).await?)
    }

    /// Fetch every entity, ordered by ID.
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        debug!("Sending request");
        Ok(self.repository().find_all().await?)
    }

    /// Overwrite an existing entity.
    #[instrument(skip(self))]
    async fn replace(&self, id: T::Id, entity: T) -> Result<Option<T>, Self::Error> {
        debug!("Sending request");
        Ok(self.repository().replace(id, entity).await?)
    }

    /// Delete an entity by ID.
    #[instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<bool, Self::Error> {
        debug!("Sending request");
        Ok(self.repository().delete_by_id(id).await?)
    }
}
