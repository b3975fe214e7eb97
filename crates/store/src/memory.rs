use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use tokio::sync::RwLock;

use crate::{EntityStore, Result, StoreError, StoredEntity};

#[derive(Debug)]
struct Inner<T> {
    items: Vec<T>,
    next_id: u32,
}

impl<T> Default for Inner<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory identity-keyed store.
///
/// Keeps records in insertion order behind an `RwLock`. Every accessor
/// clones in and out, so callers never hold a reference into the store's
/// internal state. Each mutation happens inside a single lock acquisition.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }
}

impl<T> InMemoryStore<T> {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl<T: StoredEntity> EntityStore<T> for InMemoryStore<T> {
    async fn save(&self, item: T) -> Result<T> {
        let mut inner = self.inner.write().await;
        let id = T::Id::from_raw(inner.next_id);
        inner.next_id += 1;
        let stamped = item.with_id(id);
        inner.items.push(stamped.clone());
        Ok(stamped)
    }

    async fn insert(&self, item: T) -> Result<T> {
        let mut inner = self.inner.write().await;
        let id = item.id();
        if inner.items.iter().any(|it| it.id() == id) {
            return Err(StoreError::AlreadyExists {
                kind: T::KIND,
                id: id.as_raw(),
            });
        }
        // Keep generated ids ahead of any explicitly chosen one.
        inner.next_id = inner.next_id.max(id.as_raw().saturating_add(1));
        inner.items.push(item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: T::Id) -> Result<T> {
        let inner = self.inner.read().await;
        inner
            .items
            .iter()
            .find(|it| it.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: T::KIND,
                id: id.as_raw(),
            })
    }

    async fn exists_by_id(&self, id: T::Id) -> bool {
        let inner = self.inner.read().await;
        inner.items.iter().any(|it| it.id() == id)
    }

    async fn update(&self, item: T) -> Result<T> {
        let mut inner = self.inner.write().await;
        let id = item.id();
        match inner.items.iter_mut().find(|it| it.id() == id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(item)
            }
            None => Err(StoreError::NotFound {
                kind: T::KIND,
                id: id.as_raw(),
            }),
        }
    }

    async fn delete_by_id(&self, id: T::Id) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.items.len();
        inner.items.retain(|it| it.id() != id);
        inner.items.len() < before
    }

    async fn find_all(&self) -> Vec<T> {
        self.inner.read().await.items.clone()
    }

    async fn count(&self) -> usize {
        self.inner.read().await.items.len()
    }

    async fn clear(&self) {
        self.inner.write().await.items.clear();
    }
}
