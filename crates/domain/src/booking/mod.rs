//! The booking core: allocates rooms to stays while enforcing referential
//! validity and temporal non-overlap per room.

mod commands;
mod model;
mod period;
mod service;

pub use commands::CreateBooking;
pub use model::Booking;
pub use period::StayPeriod;
pub use service::BookingService;

use chrono::NaiveDate;
use common::{BookingId, GuestId, RoomId};
use store::StoreError;
use thiserror::Error;

/// Errors from booking core operations.
#[derive(Debug, Error)]
pub enum BookingError {
    /// A caller-supplied id was not a positive number.
    #[error("{what} id must be a positive number")]
    InvalidId { what: &'static str },

    /// An explicitly chosen booking id is already taken.
    #[error("booking {id} already exists")]
    AlreadyExists { id: BookingId },

    /// The referenced guest does not exist.
    #[error("guest {id} does not exist")]
    GuestNotFound { id: GuestId },

    /// The referenced room does not exist.
    #[error("room {id} does not exist")]
    RoomNotFound { id: RoomId },

    /// The party size must match the room capacity exactly.
    #[error("room {room} sleeps {capacity} people, booking asked for {requested}")]
    CapacityMismatch {
        room: RoomId,
        capacity: u32,
        requested: u32,
    },

    /// Check-in must fall strictly before check-out.
    #[error("check-in {from} must fall strictly before check-out {to}")]
    InvalidPeriod { from: NaiveDate, to: NaiveDate },

    /// The policy in force rejects check-ins before today.
    #[error("check-in {from} lies in the past")]
    CheckInPast { from: NaiveDate },

    /// The room already has a booking overlapping the requested period.
    #[error("room {room} is already booked between {from} and {to}")]
    RoomUnavailable {
        room: RoomId,
        from: NaiveDate,
        to: NaiveDate,
    },

    /// No room matches the requested capacity and period.
    #[error("no room sleeping {people} people is free between {from} and {to}")]
    NoRoomAvailable {
        people: u32,
        from: NaiveDate,
        to: NaiveDate,
    },

    /// No booking carries the given id.
    #[error("booking {id} was not found")]
    NotFound { id: BookingId },

    /// The underlying store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
