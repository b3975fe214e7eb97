//! Domain layer for the hotel booking system.
//!
//! This crate provides:
//! - Guest and Room directories: validation + lookup facades over a store
//! - the Booking core enforcing referential validity and room availability
//! - the error taxonomy a boundary layer translates into protocol responses
//! - the `Hotel` facade wiring everything over in-memory stores

pub mod booking;
pub mod config;
pub mod error;
pub mod guest;
pub mod hotel;
pub mod room;

pub use booking::{Booking, BookingError, BookingService, CreateBooking, StayPeriod};
pub use config::BookingPolicy;
pub use error::{ErrorKind, HotelError};
pub use guest::{Gender, Guest, GuestDirectory, GuestError, GuestService};
pub use hotel::Hotel;
pub use room::{
    BedKind, Commodity, CommodityFactory, CommodityKind, InventoryId, Room, RoomDirectory,
    RoomError, RoomService,
};
