use chrono::NaiveDate;
use common::{BookingId, GuestId, RoomId};

/// Request to create a booking.
///
/// The store assigns the booking id unless the caller pins one with
/// [`with_id`](CreateBooking::with_id).
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub booking_id: Option<BookingId>,
    pub guest_id: GuestId,
    pub room_id: RoomId,
    pub people: u32,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl CreateBooking {
    pub fn new(
        guest_id: GuestId,
        room_id: RoomId,
        people: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Self {
        Self {
            booking_id: None,
            guest_id,
            room_id,
            people,
            from,
            to,
        }
    }

    /// Pins the booking id instead of letting the store assign one.
    pub fn with_id(mut self, booking_id: BookingId) -> Self {
        self.booking_id = Some(booking_id);
        self
    }
}
