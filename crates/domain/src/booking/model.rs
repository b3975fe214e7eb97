use std::hash::{Hash, Hasher};

use common::{BookingId, GuestId, RoomId};
use serde::{Deserialize, Serialize};
use store::StoredEntity;

use super::StayPeriod;

/// A stay: one guest, one room, a party size, and a period.
///
/// The guest and room ids are references, not ownership — the booking core
/// reads those directories but never mutates them. Identity is the booking
/// id alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    guest_id: GuestId,
    room_id: RoomId,
    people: u32,
    period: StayPeriod,
}

impl Booking {
    /// Assembles a booking from already-validated parts; the service is
    /// responsible for referential and capacity checks.
    pub fn new(
        id: BookingId,
        guest_id: GuestId,
        room_id: RoomId,
        people: u32,
        period: StayPeriod,
    ) -> Self {
        Self {
            id,
            guest_id,
            room_id,
            people,
            period,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn guest_id(&self) -> GuestId {
        self.guest_id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn period(&self) -> StayPeriod {
        self.period
    }

    pub fn check_in(&self) -> chrono::NaiveDate {
        self.period.check_in()
    }

    pub fn check_out(&self) -> chrono::NaiveDate {
        self.period.check_out()
    }

    /// Moves the stay to a new period.
    pub fn reschedule(&mut self, period: StayPeriod) {
        self.period = period;
    }
}

impl PartialEq for Booking {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Booking {}

impl Hash for Booking {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl StoredEntity for Booking {
    type Id = BookingId;
    const KIND: &'static str = "booking";

    fn id(&self) -> BookingId {
        self.id
    }

    fn with_id(mut self, id: BookingId) -> Self {
        self.id = id;
        self
    }
}
