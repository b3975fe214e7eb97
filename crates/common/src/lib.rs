pub mod types;

pub use types::{BookingId, EntityId, GuestId, RoomId};
