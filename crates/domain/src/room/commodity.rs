use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier a commodity receives when it enters the hotel inventory.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InventoryId(u32);

impl InventoryId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InventoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bed sizes and how many guests each sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BedKind {
    Single,
    Double,
    KingSize,
}

impl BedKind {
    /// Number of guests the bed sleeps.
    pub fn size(self) -> u32 {
        match self {
            BedKind::Single => 1,
            BedKind::Double | BedKind::KingSize => 2,
        }
    }
}

/// The fixture variants a room can be furnished with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommodityKind {
    Bed(BedKind),
    Toilet,
    Shower,
}

/// A fixture within a room, unique by its inventory id.
///
/// Equality and hashing follow the inventory id alone: the same physical
/// fixture stays the same fixture however a room is refurnished.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commodity {
    inventory_id: InventoryId,
    kind: CommodityKind,
}

impl Commodity {
    pub fn inventory_id(&self) -> InventoryId {
        self.inventory_id
    }

    pub fn kind(&self) -> CommodityKind {
        self.kind
    }

    /// Guests this commodity sleeps: the bed size for beds, zero otherwise.
    pub fn capacity(&self) -> u32 {
        match self.kind {
            CommodityKind::Bed(bed) => bed.size(),
            CommodityKind::Toilet | CommodityKind::Shower => 0,
        }
    }
}

impl PartialEq for Commodity {
    fn eq(&self, other: &Self) -> bool {
        self.inventory_id == other.inventory_id
    }
}

impl Eq for Commodity {}

impl Hash for Commodity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inventory_id.hash(state);
    }
}

/// Hands out commodities with inventory ids drawn from its own counter.
///
/// The counter belongs to the factory rather than being process-global, so
/// construction order stays deterministic and independent between tests.
#[derive(Debug, Default)]
pub struct CommodityFactory {
    next: u32,
}

impl CommodityFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> InventoryId {
        self.next += 1;
        InventoryId::new(self.next)
    }

    pub fn bed(&mut self, kind: BedKind) -> Commodity {
        Commodity {
            inventory_id: self.next_id(),
            kind: CommodityKind::Bed(kind),
        }
    }

    pub fn toilet(&mut self) -> Commodity {
        Commodity {
            inventory_id: self.next_id(),
            kind: CommodityKind::Toilet,
        }
    }

    pub fn shower(&mut self) -> Commodity {
        Commodity {
            inventory_id: self.next_id(),
            kind: CommodityKind::Shower,
        }
    }
}
