use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Behavior shared by the typed entity identifiers.
///
/// Identifiers wrap a `u32` where zero means "not assigned yet": stores stamp
/// a real id when an entity is first saved. `is_valid` is the positivity
/// probe the services run before touching a store.
pub trait EntityId:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Builds an identifier from its raw numeric value.
    fn from_raw(raw: u32) -> Self;

    /// Returns the raw numeric value.
    fn as_raw(self) -> u32;

    /// Returns true for assigned (positive) identifiers.
    fn is_valid(self) -> bool {
        self.as_raw() > 0
    }
}

/// Unique identifier for a guest.
///
/// Wraps the numeric id to provide type safety and prevent mixing up
/// guest ids with room or booking ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(u32);

impl GuestId {
    /// Creates a guest id from a raw value.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl EntityId for GuestId {
    fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for GuestId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<GuestId> for u32 {
    fn from(id: GuestId) -> Self {
        id.0
    }
}

/// Unique identifier for a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(u32);

impl RoomId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl EntityId for RoomId {
    fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<RoomId> for u32 {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

/// Unique identifier for a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u32);

impl BookingId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl EntityId for BookingId {
    fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BookingId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<BookingId> for u32 {
    fn from(id: BookingId) -> Self {
        id.0
    }
}
