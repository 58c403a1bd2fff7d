//! # Store Messages
//!
//! The request type sent from a [`StoreClient`](crate::framework::StoreClient) to a
//! [`StoreActor`](crate::framework::StoreActor). Each variant carries a oneshot
//! sender the actor uses to reply.

use crate::framework::entity::StoreEntity;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<T>;

/// Internal message type sent to the store task.
///
/// The variants map onto the repository operations:
///
/// - **Save**: insert when the entity has no id, otherwise overwrite.
/// - **FindById**: fetch one record; absence is `None`.
/// - **FindAll**: every record, ordered by id.
/// - **Replace**: overwrite an existing record only.
/// - **DeleteById**: remove a record; replies whether anything was removed.
#[derive(Debug)]
pub enum StoreRequest<T: StoreEntity> {
    Save {
        entity: T,
        respond_to: Response<T>,
    },
    FindById {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        entity: T,
        respond_to: Response<Option<T>>,
    },
    DeleteById {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
