use std::hash::{Hash, Hasher};

use common::RoomId;
use serde::{Deserialize, Serialize};
use store::StoredEntity;

use super::{Commodity, RoomError};

/// A hotel room: an id plus the commodities that furnish it.
///
/// Capacity is derived, never stored: the sum of bed sizes across the
/// commodity set. A room whose commodities sleep nobody is invalid, so a
/// successfully constructed room always has capacity greater than zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    commodities: Vec<Commodity>,
}

impl Room {
    /// Builds a room from a commodity set.
    ///
    /// Commodities are deduplicated by inventory id (first occurrence wins).
    pub fn new(id: RoomId, commodities: Vec<Commodity>) -> Result<Self, RoomError> {
        let mut room = Self {
            id,
            commodities: Vec::new(),
        };
        room.replace_commodities(commodities)?;
        Ok(room)
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn commodities(&self) -> &[Commodity] {
        &self.commodities
    }

    /// Maximum number of guests the room sleeps.
    pub fn capacity(&self) -> u32 {
        self.commodities.iter().map(Commodity::capacity).sum()
    }

    /// Swaps the commodity set, enforcing the non-empty and
    /// positive-capacity invariants before any state changes.
    pub fn replace_commodities(&mut self, commodities: Vec<Commodity>) -> Result<(), RoomError> {
        if commodities.is_empty() {
            return Err(RoomError::NoCommodities);
        }
        let mut deduped: Vec<Commodity> = Vec::with_capacity(commodities.len());
        for commodity in commodities {
            if !deduped
                .iter()
                .any(|c| c.inventory_id() == commodity.inventory_id())
            {
                deduped.push(commodity);
            }
        }
        if deduped.iter().map(Commodity::capacity).sum::<u32>() == 0 {
            return Err(RoomError::ZeroCapacity);
        }
        self.commodities = deduped;
        Ok(())
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StoredEntity for Room {
    type Id = RoomId;
    const KIND: &'static str = "room";

    fn id(&self) -> RoomId {
        self.id
    }

    fn with_id(mut self, id: RoomId) -> Self {
        self.id = id;
        self
    }
}
