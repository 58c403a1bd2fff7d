//! # Store Client
//!
//! The cheap-to-clone handle callers use to reach a [`StoreActor`](crate::framework::StoreActor).

use crate::framework::entity::StoreEntity;
use crate::framework::error::StoreError;
use crate::framework::message::{Response, StoreRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `StoreActor`.
///
/// Holds only the sending half of the request channel, so cloning is inexpensive
/// and clones can be shared across tasks. Once every clone is dropped, the store
/// task sees its channel close and shuts down.
#[derive(Clone)]
pub struct StoreClient<T: StoreEntity> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: StoreEntity> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn save(&self, entity: T) -> Result<T, StoreError> {
        self.call(|respond_to| StoreRequest::Save { entity, respond_to })
            .await
    }

    pub async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::FindById { id, respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        self.call(|respond_to| StoreRequest::FindAll { respond_to })
            .await
    }

    pub async fn replace(&self, id: T::Id, entity: T) -> Result<Option<T>, StoreError> {
        self.call(|respond_to| StoreRequest::Replace {
            id,
            entity,
            respond_to,
        })
        .await
    }

    pub async fn delete_by_id(&self, id: T::Id) -> Result<bool, StoreError> {
        self.call(|respond_to| StoreRequest::DeleteById { id, respond_to })
            .await
    }

    /// Sends one request and waits for its reply.
    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)
    }
}
