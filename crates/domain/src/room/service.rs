use async_trait::async_trait;
use common::{EntityId, RoomId};
use store::EntityStore;

use super::{Commodity, Room, RoomError};

/// Room capabilities the booking core consumes: existence check, lookup,
/// capacity query, and enumeration for automatic room selection.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// True iff a room with that id is present. Never fails.
    async fn exists_by_id(&self, id: RoomId) -> bool;

    /// Snapshot of the room with the given id.
    async fn get_by_id(&self, id: RoomId) -> Result<Room, RoomError>;

    /// Capacity of the room with the given id.
    async fn capacity_of(&self, id: RoomId) -> Result<u32, RoomError>;

    /// Snapshot of every room.
    async fn list(&self) -> Vec<Room>;
}

/// Validation and lookup facade over the room store.
///
/// Reads hand out copies; changes to a stored room go through
/// [`update`](RoomService::update), which recomputes capacity.
pub struct RoomService<S> {
    store: S,
}

impl<S: EntityStore<Room>> RoomService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Furnishes a new room; the store assigns the id.
    #[tracing::instrument(skip(self, commodities))]
    pub async fn create(&self, commodities: Vec<Commodity>) -> Result<Room, RoomError> {
        let room = Room::new(RoomId::default(), commodities)?;
        Ok(self.store.save(room).await?)
    }

    /// Furnishes several rooms at once. Validation failures abort the whole
    /// batch before anything is stored.
    pub async fn create_all(&self, sets: Vec<Vec<Commodity>>) -> Result<Vec<Room>, RoomError> {
        let mut rooms = Vec::with_capacity(sets.len());
        for commodities in sets {
            rooms.push(Room::new(RoomId::default(), commodities)?);
        }
        Ok(self.store.save_all(rooms).await?)
    }

    /// Returns a copy of the room with the given id. Unassigned and unknown
    /// ids both resolve to `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: RoomId) -> Result<Room, RoomError> {
        if !id.is_valid() {
            return Err(RoomError::NotFound { id });
        }
        self.store
            .find_by_id(id)
            .await
            .map_err(|_| RoomError::NotFound { id })
    }

    /// Replaces the room's commodity set and returns the updated copy.
    #[tracing::instrument(skip(self, commodities))]
    pub async fn update(&self, id: RoomId, commodities: Vec<Commodity>) -> Result<Room, RoomError> {
        let mut room = self.get_by_id(id).await?;
        room.replace_commodities(commodities)?;
        self.store
            .update(room)
            .await
            .map_err(|_| RoomError::NotFound { id })
    }

    /// Removes the given room. Returns false when nothing matched.
    pub async fn delete(&self, room: &Room) -> bool {
        self.store.delete(room).await
    }

    /// Removes the room with the given id. Returns false when nothing
    /// matched.
    pub async fn delete_by_id(&self, id: RoomId) -> bool {
        id.is_valid() && self.store.delete_by_id(id).await
    }

    pub async fn exists_by_id(&self, id: RoomId) -> bool {
        id.is_valid() && self.store.exists_by_id(id).await
    }

    /// Snapshot of every room.
    pub async fn list(&self) -> Vec<Room> {
        self.store.find_all().await
    }

    pub async fn count(&self) -> usize {
        self.store.count().await
    }
}

#[async_trait]
impl<S: EntityStore<Room>> RoomDirectory for RoomService<S> {
    async fn exists_by_id(&self, id: RoomId) -> bool {
        RoomService::exists_by_id(self, id).await
    }

    async fn get_by_id(&self, id: RoomId) -> Result<Room, RoomError> {
        RoomService::get_by_id(self, id).await
    }

    async fn capacity_of(&self, id: RoomId) -> Result<u32, RoomError> {
        Ok(RoomService::get_by_id(self, id).await?.capacity())
    }

    async fn list(&self) -> Vec<Room> {
        RoomService::list(self).await
    }
}
