//! # Store Actor
//!
//! The `StoreActor` is the server half of the store. It owns the canonical record
//! collection and processes requests one at a time, so every write to a given id
//! is serialized without any lock. Last write wins.

use crate::framework::client::StoreClient;
use crate::framework::entity::StoreEntity;
use crate::framework::message::StoreRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that keeps a keyed collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `StoreActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn `actor.run()` in a background task.
/// 3.  **Use**: Clone the client wherever the records are needed.
///
/// # Implementation Details
///
/// Records live in a `BTreeMap` keyed by id, so `FindAll` comes back ordered.
/// A `u32` counter (`next_id`) feeds id generation.
///
/// * **Save**:
///     1. If the entity has no id, takes the next counter value that is not
///        already occupied (client-supplied ids are skipped) and stamps it on.
///     2. Inserts the entity, replacing any previous record at that id wholesale.
///     3. Returns the stored entity.
///
/// * **FindById**: returns a clone of the record, or `None`.
///
/// * **Replace**: overwrites the record only if the id is present.
///
/// * **DeleteById**: removes the record if present. Deleting a missing id is a no-op.
pub struct StoreActor<T: StoreEntity> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, StoreClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" rather than the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { entity, respond_to } => {
                    debug!(entity_type, ?entity, "Save");
                    let (id, entity) = match entity.id() {
                        Some(id) => (id, entity),
                        None => {
                            let id = self.allocate_id();
                            (id.clone(), entity.with_id(id))
                        }
                    };
                    let replaced = self.store.insert(id.clone(), entity.clone()).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Saved");
                    let _ = respond_to.send(entity);
                }
                StoreRequest::FindById { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "FindById");
                    let _ = respond_to.send(item);
                }
                StoreRequest::FindAll { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "FindAll");
                    let _ = respond_to.send(self.store.values().cloned().collect());
                }
                StoreRequest::Replace {
                    id,
                    entity,
                    respond_to,
                } => {
                    let result = match self.store.get_mut(&id) {
                        Some(slot) => {
                            *slot = entity.with_id(id.clone());
                            info!(entity_type, %id, "Replaced");
                            Some(slot.clone())
                        }
                        None => {
                            debug!(entity_type, %id, "Replace target not found");
                            None
                        }
                    };
                    let _ = respond_to.send(result);
                }
                StoreRequest::DeleteById { id, respond_to } => {
                    let removed = self.store.remove(&id).is_some();
                    if removed {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    } else {
                        debug!(entity_type, %id, "Delete of missing id ignored");
                    }
                    let _ = respond_to.send(removed);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Next sequence value not already taken by a stored record.
    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id = self.next_id.wrapping_add(1).max(1);
            if !self.store.contains_key(&id) {
                return id;
            }
        }
    }
}
