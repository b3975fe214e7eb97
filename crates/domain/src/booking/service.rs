use std::sync::Arc;

use chrono::{Local, NaiveDate};
use common::{BookingId, EntityId, GuestId, RoomId};
use store::EntityStore;
use tokio::sync::Mutex;

use crate::config::BookingPolicy;
use crate::guest::GuestDirectory;
use crate::room::RoomDirectory;

use super::{Booking, BookingError, CreateBooking, StayPeriod};

/// The booking core.
///
/// Validates every stay against the guest and room directories, keeps the
/// per-room calendar free of overlapping periods, and owns the booking store
/// outright: nothing else writes bookings.
pub struct BookingService<S> {
    store: S,
    guests: Arc<dyn GuestDirectory>,
    rooms: Arc<dyn RoomDirectory>,
    policy: BookingPolicy,
    /// Serializes mutating operations. The availability scan and the write
    /// that follows must be indivisible, or two concurrent requests could
    /// both pass the scan against the same calendar.
    write_gate: Mutex<()>,
}

impl<S: EntityStore<Booking>> BookingService<S> {
    pub fn new(store: S, guests: Arc<dyn GuestDirectory>, rooms: Arc<dyn RoomDirectory>) -> Self {
        Self::with_policy(store, guests, rooms, BookingPolicy::default())
    }

    pub fn with_policy(
        store: S,
        guests: Arc<dyn GuestDirectory>,
        rooms: Arc<dyn RoomDirectory>,
        policy: BookingPolicy,
    ) -> Self {
        Self {
            store,
            guests,
            rooms,
            policy,
            write_gate: Mutex::new(()),
        }
    }

    /// Books a room for a stay.
    ///
    /// Checks the ids, resolves the guest and room, requires the party size
    /// to match the room capacity exactly, validates the dates, and scans
    /// the room's calendar for overlaps before persisting.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, cmd: CreateBooking) -> Result<Booking, BookingError> {
        let _gate = self.write_gate.lock().await;
        self.create_locked(cmd).await
    }

    /// Books the first room that sleeps exactly `people` and is free for the
    /// whole window. Convenience on top of [`create`](BookingService::create)
    /// for callers that do not pick rooms themselves.
    #[tracing::instrument(skip(self))]
    pub async fn create_for_guest(
        &self,
        guest_id: GuestId,
        people: u32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let _gate = self.write_gate.lock().await;

        if !guest_id.is_valid() {
            return Err(BookingError::InvalidId { what: "guest" });
        }
        if !self.guests.exists_by_id(guest_id).await {
            return Err(BookingError::GuestNotFound { id: guest_id });
        }
        let period = self.admissible_period(from, to)?;
        let mut rooms = self.rooms.list().await;
        rooms.sort_by_key(|room| room.id());
        for room in rooms {
            if room.capacity() == people && self.room_is_free(room.id(), period, None).await {
                let cmd = CreateBooking::new(guest_id, room.id(), people, from, to);
                return self.create_locked(cmd).await;
            }
        }
        Err(BookingError::NoRoomAvailable { people, from, to })
    }

    // Callers must hold `write_gate`.
    async fn create_locked(&self, cmd: CreateBooking) -> Result<Booking, BookingError> {
        if let Some(id) = cmd.booking_id
            && !id.is_valid()
        {
            return Err(BookingError::InvalidId { what: "booking" });
        }
        if !cmd.guest_id.is_valid() {
            return Err(BookingError::InvalidId { what: "guest" });
        }
        if !cmd.room_id.is_valid() {
            return Err(BookingError::InvalidId { what: "room" });
        }
        if let Some(id) = cmd.booking_id
            && self.store.exists_by_id(id).await
        {
            return Err(BookingError::AlreadyExists { id });
        }
        if !self.guests.exists_by_id(cmd.guest_id).await {
            return Err(BookingError::GuestNotFound { id: cmd.guest_id });
        }
        let capacity = self
            .rooms
            .capacity_of(cmd.room_id)
            .await
            .map_err(|_| BookingError::RoomNotFound { id: cmd.room_id })?;
        if capacity != cmd.people {
            return Err(BookingError::CapacityMismatch {
                room: cmd.room_id,
                capacity,
                requested: cmd.people,
            });
        }
        let period = self.admissible_period(cmd.from, cmd.to)?;
        self.ensure_room_free(cmd.room_id, period, None).await?;

        let booking = Booking::new(
            cmd.booking_id.unwrap_or_default(),
            cmd.guest_id,
            cmd.room_id,
            cmd.people,
            period,
        );
        let booking = match cmd.booking_id {
            Some(_) => self.store.insert(booking).await?,
            None => self.store.save(booking).await?,
        };
        metrics::counter!("bookings_created_total").increment(1);
        Ok(booking)
    }

    /// Full snapshot of every booking.
    pub async fn list(&self) -> Vec<Booking> {
        self.store.find_all().await
    }

    /// All bookings currently holding the given room.
    pub async fn bookings_for_room(&self, room_id: RoomId) -> Vec<Booking> {
        self.store
            .find_all()
            .await
            .into_iter()
            .filter(|booking| booking.room_id() == room_id)
            .collect()
    }

    /// Returns a copy of the booking with the given id. Unassigned and
    /// unknown ids both resolve to `NotFound`.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: BookingId) -> Result<Booking, BookingError> {
        if !id.is_valid() {
            return Err(BookingError::NotFound { id });
        }
        self.store
            .find_by_id(id)
            .await
            .map_err(|_| BookingError::NotFound { id })
    }

    pub async fn exists_by_id(&self, id: BookingId) -> bool {
        id.is_valid() && self.store.exists_by_id(id).await
    }

    /// Moves a booking to new dates.
    ///
    /// A new period overlapping the booking's current one only displaces the
    /// booking itself, so the calendar scan is skipped; anything else must
    /// clear the room's other bookings first.
    #[tracing::instrument(skip(self))]
    pub async fn update_dates(
        &self,
        id: BookingId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Booking, BookingError> {
        let _gate = self.write_gate.lock().await;

        let mut booking = self.get_by_id(id).await?;
        let period = self.admissible_period(from, to)?;
        if !period.overlaps(booking.period()) {
            self.ensure_room_free(booking.room_id(), period, Some(id))
                .await?;
        }
        booking.reschedule(period);
        self.store
            .update(booking)
            .await
            .map_err(|_| BookingError::NotFound { id })
    }

    /// Cancels a booking. Removal is permanent; there is no retained
    /// cancelled state.
    #[tracing::instrument(skip(self))]
    pub async fn remove_by_id(&self, id: BookingId) -> Result<(), BookingError> {
        let _gate = self.write_gate.lock().await;

        if !self.exists_by_id(id).await {
            return Err(BookingError::NotFound { id });
        }
        self.store.delete_by_id(id).await;
        metrics::counter!("bookings_removed_total").increment(1);
        Ok(())
    }

    fn admissible_period(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<StayPeriod, BookingError> {
        let period = StayPeriod::new(from, to)?;
        if self.policy.reject_past_check_in && period.check_in() < Local::now().date_naive() {
            return Err(BookingError::CheckInPast { from });
        }
        Ok(period)
    }

    async fn room_is_free(
        &self,
        room_id: RoomId,
        period: StayPeriod,
        exclude: Option<BookingId>,
    ) -> bool {
        self.bookings_for_room(room_id)
            .await
            .iter()
            .filter(|booking| Some(booking.id()) != exclude)
            .all(|booking| !booking.period().overlaps(period))
    }

    async fn ensure_room_free(
        &self,
        room_id: RoomId,
        period: StayPeriod,
        exclude: Option<BookingId>,
    ) -> Result<(), BookingError> {
        if !self.room_is_free(room_id, period, exclude).await {
            tracing::debug!(%room_id, "rejected: room already booked for the period");
            metrics::counter!("booking_conflicts_total").increment(1);
            return Err(BookingError::RoomUnavailable {
                room: room_id,
                from: period.check_in(),
                to: period.check_out(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use store::InMemoryStore;

    use crate::guest::{Gender, GuestService};
    use crate::room::{BedKind, CommodityFactory, RoomService};

    use super::*;

    async fn service_with_one_room() -> (BookingService<InMemoryStore<Booking>>, GuestId, RoomId) {
        let guests = Arc::new(GuestService::new(InMemoryStore::new()));
        let rooms = Arc::new(RoomService::new(InMemoryStore::new()));

        let guest = guests.create("Maria", "Petrova", Gender::Female).await.unwrap();
        let mut factory = CommodityFactory::new();
        let room = rooms
            .create(vec![factory.bed(BedKind::Double), factory.toilet()])
            .await
            .unwrap();

        let service = BookingService::new(InMemoryStore::new(), guests, rooms);
        (service, guest.id(), room.id())
    }

    fn day(d: u32) -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[tokio::test]
    async fn create_persists_and_stamps_an_id() {
        let (service, guest, room) = service_with_one_room().await;

        let booking = service
            .create(CreateBooking::new(guest, room, 2, day(1), day(5)))
            .await
            .unwrap();

        assert_eq!(booking.id(), BookingId::new(1));
        assert_eq!(booking.period().nights(), 4);
        assert!(service.exists_by_id(booking.id()).await);
    }

    #[tokio::test]
    async fn create_rejects_unknown_guest() {
        let (service, _, room) = service_with_one_room().await;

        let result = service
            .create(CreateBooking::new(GuestId::new(99), room, 2, day(1), day(5)))
            .await;
        assert!(matches!(result, Err(BookingError::GuestNotFound { .. })));
    }

    #[tokio::test]
    async fn create_rejects_unknown_room() {
        let (service, guest, _) = service_with_one_room().await;

        let result = service
            .create(CreateBooking::new(guest, RoomId::new(99), 2, day(1), day(5)))
            .await;
        assert!(matches!(result, Err(BookingError::RoomNotFound { .. })));
    }

    #[tokio::test]
    async fn create_rejects_capacity_mismatch() {
        let (service, guest, room) = service_with_one_room().await;

        let result = service
            .create(CreateBooking::new(guest, room, 1, day(1), day(5)))
            .await;
        assert!(matches!(
            result,
            Err(BookingError::CapacityMismatch { capacity: 2, requested: 1, .. })
        ));
    }

    #[tokio::test]
    async fn create_rejects_unassigned_ids() {
        let (service, guest, room) = service_with_one_room().await;

        let bad_guest = service
            .create(CreateBooking::new(GuestId::default(), room, 2, day(1), day(5)))
            .await;
        assert!(matches!(bad_guest, Err(BookingError::InvalidId { what: "guest" })));

        let bad_room = service
            .create(CreateBooking::new(guest, RoomId::default(), 2, day(1), day(5)))
            .await;
        assert!(matches!(bad_room, Err(BookingError::InvalidId { what: "room" })));

        let bad_booking = service
            .create(
                CreateBooking::new(guest, room, 2, day(1), day(5)).with_id(BookingId::default()),
            )
            .await;
        assert!(matches!(bad_booking, Err(BookingError::InvalidId { what: "booking" })));
    }

    #[tokio::test]
    async fn explicit_id_conflicts_are_rejected() {
        let (service, guest, room) = service_with_one_room().await;

        service
            .create(CreateBooking::new(guest, room, 2, day(1), day(3)).with_id(BookingId::new(7)))
            .await
            .unwrap();

        let duplicate = service
            .create(CreateBooking::new(guest, room, 2, day(10), day(12)).with_id(BookingId::new(7)))
            .await;
        assert!(matches!(
            duplicate,
            Err(BookingError::AlreadyExists { id }) if id == BookingId::new(7)
        ));
    }

    #[tokio::test]
    async fn overlapping_bookings_are_rejected() {
        let (service, guest, room) = service_with_one_room().await;

        service
            .create(CreateBooking::new(guest, room, 2, day(1), day(5)))
            .await
            .unwrap();

        let overlap = service
            .create(CreateBooking::new(guest, room, 2, day(3), day(7)))
            .await;
        assert!(matches!(overlap, Err(BookingError::RoomUnavailable { .. })));
    }

    #[tokio::test]
    async fn back_to_back_stays_are_allowed() {
        let (service, guest, room) = service_with_one_room().await;

        service
            .create(CreateBooking::new(guest, room, 2, day(1), day(5)))
            .await
            .unwrap();

        let followup = service
            .create(CreateBooking::new(guest, room, 2, day(5), day(7)))
            .await;
        assert!(followup.is_ok());
    }

    #[tokio::test]
    async fn update_within_own_period_skips_the_scan() {
        let (service, guest, room) = service_with_one_room().await;
        let booking = service
            .create(CreateBooking::new(guest, room, 2, day(1), day(5)))
            .await
            .unwrap();

        let updated = service.update_dates(booking.id(), day(2), day(4)).await.unwrap();
        assert_eq!(updated.check_in(), day(2));
        assert_eq!(updated.check_out(), day(4));
    }

    #[tokio::test]
    async fn update_into_another_booking_is_a_conflict() {
        let (service, guest, room) = service_with_one_room().await;
        let first = service
            .create(CreateBooking::new(guest, room, 2, day(1), day(3)))
            .await
            .unwrap();
        service
            .create(CreateBooking::new(guest, room, 2, day(10), day(12)))
            .await
            .unwrap();

        let result = service.update_dates(first.id(), day(11), day(13)).await;
        assert!(matches!(result, Err(BookingError::RoomUnavailable { .. })));
    }

    #[tokio::test]
    async fn remove_is_strict_and_permanent() {
        let (service, guest, room) = service_with_one_room().await;
        let booking = service
            .create(CreateBooking::new(guest, room, 2, day(1), day(5)))
            .await
            .unwrap();

        service.remove_by_id(booking.id()).await.unwrap();
        assert!(!service.exists_by_id(booking.id()).await);

        let again = service.remove_by_id(booking.id()).await;
        assert!(matches!(again, Err(BookingError::NotFound { .. })));
    }

    #[tokio::test]
    async fn auto_selection_picks_the_first_free_room() {
        let guests = Arc::new(GuestService::new(InMemoryStore::new()));
        let rooms = Arc::new(RoomService::new(InMemoryStore::new()));
        let guest = guests.create("Ivan", "Ivanov", Gender::Male).await.unwrap();

        let mut factory = CommodityFactory::new();
        let first = rooms.create(vec![factory.bed(BedKind::Double)]).await.unwrap();
        let second = rooms.create(vec![factory.bed(BedKind::Double)]).await.unwrap();

        let service = BookingService::new(InMemoryStore::new(), guests, rooms);

        let a = service
            .create_for_guest(guest.id(), 2, day(1), day(5))
            .await
            .unwrap();
        assert_eq!(a.room_id(), first.id());

        // First room is taken for the window, the next one steps in.
        let b = service
            .create_for_guest(guest.id(), 2, day(3), day(6))
            .await
            .unwrap();
        assert_eq!(b.room_id(), second.id());

        let none = service.create_for_guest(guest.id(), 2, day(4), day(5)).await;
        assert!(matches!(none, Err(BookingError::NoRoomAvailable { .. })));
    }
}
