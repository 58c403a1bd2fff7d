use crate::framework::{StoreEntity, StoreError};
use crate::repository::Repository;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Repository over a shared map guarded by a `tokio::sync::RwLock`.
///
/// Writers take the lock exclusively, which serializes saves and deletes for every
/// id. Id assignment follows the same rule as the store task: the next counter
/// value not already in use.
pub struct SharedMapRepository<T: StoreEntity> {
    inner: Arc<RwLock<Records<T>>>,
}

struct Records<T: StoreEntity> {
    by_id: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: StoreEntity> SharedMapRepository<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Records {
                by_id: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

impl<T: StoreEntity> Default for SharedMapRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> Clone for SharedMapRepository<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: StoreEntity> Records<T> {
    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id = self.next_id.wrapping_add(1).max(1);
            if !self.by_id.contains_key(&id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl<T: StoreEntity> Repository<T> for SharedMapRepository<T> {
    async fn save(&self, entity: T) -> Result<T, StoreError> {
        let mut records = self.inner.write().await;
        let (id, entity) = match entity.id() {
            Some(id) => (id, entity),
            None => {
                let id = records.allocate_id();
                (id.clone(), entity.with_id(id))
            }
        };
        records.by_id.insert(id.clone(), entity.clone());
        info!(%id, size = records.by_id.len(), "Saved");
        Ok(entity)
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let item = self.inner.read().await.by_id.get(&id).cloned();
        debug!(%id, found = item.is_some(), "FindById");
        Ok(item)
    }

    async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.inner.read().await.by_id.values().cloned().collect())
    }

    async fn replace(&self, id: T::Id, entity: T) -> Result<Option<T>, StoreError> {
        let mut records = self.inner.write().await;
        Ok(records.by_id.get_mut(&id).map(|slot| {
            *slot = entity.with_id(id.clone());
            info!(%id, "Replaced");
            slot.clone()
        }))
    }

    async fn delete_by_id(&self, id: T::Id) -> Result<bool, StoreError> {
        let removed = self.inner.write().await.by_id.remove(&id).is_some();
        debug!(%id, removed, "DeleteById");
        Ok(removed)
    }
}
