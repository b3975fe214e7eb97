//! Plain-constructor wiring of the three services over in-memory stores.

use std::sync::Arc;

use chrono::NaiveDate;
use common::{BookingId, GuestId, RoomId};
use store::InMemoryStore;

use crate::booking::{Booking, BookingService, CreateBooking};
use crate::config::BookingPolicy;
use crate::error::HotelError;
use crate::guest::{Gender, Guest, GuestDirectory, GuestService};
use crate::room::{Commodity, Room, RoomDirectory, RoomService};

/// The assembled hotel: guest and room directories plus the booking core,
/// all backed by in-memory stores.
///
/// Every operation a transport layer needs is reachable here as a single
/// call, and each one returns either its value or a classified
/// [`HotelError`]. Nothing survives a restart — the stores are
/// memory-resident by design.
pub struct Hotel {
    guests: Arc<GuestService<InMemoryStore<Guest>>>,
    rooms: Arc<RoomService<InMemoryStore<Room>>>,
    bookings: BookingService<InMemoryStore<Booking>>,
}

impl Hotel {
    pub fn new() -> Self {
        Self::with_policy(BookingPolicy::default())
    }

    pub fn with_policy(policy: BookingPolicy) -> Self {
        let guests = Arc::new(GuestService::new(InMemoryStore::new()));
        let rooms = Arc::new(RoomService::new(InMemoryStore::new()));
        let bookings = BookingService::with_policy(
            InMemoryStore::new(),
            Arc::clone(&guests) as Arc<dyn GuestDirectory>,
            Arc::clone(&rooms) as Arc<dyn RoomDirectory>,
            policy,
        );
        Self {
            guests,
            rooms,
            bookings,
        }
    }

    // Guests

    pub async fn register_guest(
        &self,
        first_name: &str,
        last_name: &str,
        gender: Gender,
    ) -> Result<Guest, HotelError> {
        Ok(self.guests.create(first_name, last_name, gender).await?)
    }

    pub async fn get_guest(&self, id: GuestId) -> Result<Guest, HotelError> {
        Ok(self.guests.get_by_id(id).await?)
    }

    pub async fn update_guest(
        &self,
        id: GuestId,
        first_name: &str,
        last_name: &str,
        gender: Gender,
    ) -> Result<Guest, HotelError> {
        Ok(self.guests.update(id, first_name, last_name, gender).await?)
    }

    pub async fn remove_guest(&self, id: GuestId) -> Result<(), HotelError> {
        Ok(self.guests.remove(id).await?)
    }

    pub async fn list_guests(&self) -> Vec<Guest> {
        self.guests.list().await
    }

    // Rooms

    pub async fn add_room(&self, commodities: Vec<Commodity>) -> Result<Room, HotelError> {
        Ok(self.rooms.create(commodities).await?)
    }

    pub async fn get_room(&self, id: RoomId) -> Result<Room, HotelError> {
        Ok(self.rooms.get_by_id(id).await?)
    }

    pub async fn update_room(
        &self,
        id: RoomId,
        commodities: Vec<Commodity>,
    ) -> Result<Room, HotelError> {
        Ok(self.rooms.update(id, commodities).await?)
    }

    pub async fn remove_room(&self, id: RoomId) -> bool {
        self.rooms.delete_by_id(id).await
    }

    pub async fn list_rooms(&self) -> Vec<Room> {
        self.rooms.list().await
    }

    // Bookings

    pub async fn book(&self, cmd: CreateBooking) -> Result<Booking, HotelError> {
        Ok(self.bookings.create(cmd).await?)
    }

    pub async fn book_for_guest(
        &self,
        guest_id: GuestId,
        people: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Booking, HotelError> {
        Ok(self
            .bookings
            .create_for_guest(guest_id, people, from, to)
            .await?)
    }

    pub async fn get_booking(&self, id: BookingId) -> Result<Booking, HotelError> {
        Ok(self.bookings.get_by_id(id).await?)
    }

    pub async fn update_booking_dates(
        &self,
        id: BookingId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Booking, HotelError> {
        Ok(self.bookings.update_dates(id, from, to).await?)
    }

    pub async fn cancel_booking(&self, id: BookingId) -> Result<(), HotelError> {
        Ok(self.bookings.remove_by_id(id).await?)
    }

    pub async fn booking_exists(&self, id: BookingId) -> bool {
        self.bookings.exists_by_id(id).await
    }

    pub async fn list_bookings(&self) -> Vec<Booking> {
        self.bookings.list().await
    }

    // Direct access to the underlying services.

    pub fn guest_service(&self) -> &GuestService<InMemoryStore<Guest>> {
        &self.guests
    }

    pub fn room_service(&self) -> &RoomService<InMemoryStore<Room>> {
        &self.rooms
    }

    pub fn booking_service(&self) -> &BookingService<InMemoryStore<Booking>> {
        &self.bookings
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}
