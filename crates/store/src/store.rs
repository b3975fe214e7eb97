use async_trait::async_trait;

use crate::{Result, StoredEntity};

/// Generic repository capability over a single entity type.
///
/// Implementations hand out copies in both directions: the store keeps the
/// canonical record, and a caller mutating a returned entity can never
/// corrupt the stored state. All implementations must be thread-safe.
#[async_trait]
pub trait EntityStore<T: StoredEntity>: Send + Sync {
    /// Stores a copy of the item under a freshly assigned id and returns the
    /// stamped copy. Ids are monotonic and never reused within one store
    /// instance.
    async fn save(&self, item: T) -> Result<T>;

    /// Saves every item in order, returning the stamped copies.
    async fn save_all(&self, items: Vec<T>) -> Result<Vec<T>> {
        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            saved.push(self.save(item).await?);
        }
        Ok(saved)
    }

    /// Stores a copy of the item under the id it already carries.
    ///
    /// Fails with `AlreadyExists` when that id is taken. Callers are
    /// expected to validate the id before inserting.
    async fn insert(&self, item: T) -> Result<T>;

    /// Returns a copy of the record with the given id, or `NotFound`.
    async fn find_by_id(&self, id: T::Id) -> Result<T>;

    /// Existence probe; never fails.
    async fn exists_by_id(&self, id: T::Id) -> bool;

    /// Replaces the stored record carrying the same id and returns a copy of
    /// the new state. Fails with `NotFound` when there is nothing to replace.
    async fn update(&self, item: T) -> Result<T>;

    /// Removes the record matching the item's identity. Returns false when
    /// nothing matched; a miss is not an error.
    async fn delete(&self, item: &T) -> bool {
        self.delete_by_id(item.id()).await
    }

    /// Removes the record with the given id. Returns false on no match.
    async fn delete_by_id(&self, id: T::Id) -> bool;

    /// Snapshot of every stored record, in insertion order.
    async fn find_all(&self) -> Vec<T>;

    /// Number of records currently stored.
    async fn count(&self) -> usize;

    /// Removes every record. The id counter is not reset.
    async fn clear(&self);
}
