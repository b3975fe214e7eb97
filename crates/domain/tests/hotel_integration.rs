//! End-to-end tests through the `Hotel` facade: the full guest / room /
//! booking lifecycle plus error classification for a boundary layer.

use chrono::NaiveDate;
use common::{BookingId, GuestId, RoomId};
use domain::{
    BedKind, CommodityFactory, CreateBooking, ErrorKind, Gender, Hotel, HotelError,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

#[tokio::test]
async fn full_stay_lifecycle() {
    let hotel = Hotel::new();
    let mut factory = CommodityFactory::new();

    let guest = hotel
        .register_guest("Maria", "Petrova", Gender::Female)
        .await
        .unwrap();
    let room = hotel
        .add_room(vec![factory.bed(BedKind::Double), factory.shower()])
        .await
        .unwrap();
    assert_eq!(room.capacity(), 2);

    let booking = hotel
        .book(CreateBooking::new(guest.id(), room.id(), 2, day(1), day(6)))
        .await
        .unwrap();
    assert!(hotel.booking_exists(booking.id()).await);
    assert_eq!(hotel.list_bookings().await.len(), 1);

    let moved = hotel
        .update_booking_dates(booking.id(), day(2), day(5))
        .await
        .unwrap();
    assert_eq!(moved.check_in(), day(2));

    hotel.cancel_booking(booking.id()).await.unwrap();
    assert!(!hotel.booking_exists(booking.id()).await);
    assert!(hotel.list_bookings().await.is_empty());
}

#[tokio::test]
async fn guest_directory_through_the_facade() {
    let hotel = Hotel::new();

    let guest = hotel
        .register_guest("Ivan", "Ivanov", Gender::Male)
        .await
        .unwrap();

    let updated = hotel
        .update_guest(guest.id(), "Ivan", "Petrov", Gender::Male)
        .await
        .unwrap();
    assert_eq!(updated.last_name(), "Petrov");
    assert_eq!(hotel.list_guests().await.len(), 1);

    hotel.remove_guest(guest.id()).await.unwrap();
    assert!(hotel.list_guests().await.is_empty());
}

#[tokio::test]
async fn room_directory_through_the_facade() {
    let hotel = Hotel::new();
    let mut factory = CommodityFactory::new();

    let room = hotel
        .add_room(vec![factory.bed(BedKind::Single)])
        .await
        .unwrap();
    assert_eq!(room.capacity(), 1);

    let refurnished = hotel
        .update_room(room.id(), vec![factory.bed(BedKind::KingSize), factory.toilet()])
        .await
        .unwrap();
    assert_eq!(refurnished.capacity(), 2);

    assert!(hotel.remove_room(room.id()).await);
    assert!(!hotel.remove_room(room.id()).await);
    assert!(hotel.list_rooms().await.is_empty());
}

#[tokio::test]
async fn auto_selection_books_a_matching_room() {
    let hotel = Hotel::new();
    let mut factory = CommodityFactory::new();

    let guest = hotel
        .register_guest("Elena", "Georgieva", Gender::Female)
        .await
        .unwrap();
    hotel
        .add_room(vec![factory.bed(BedKind::Single)])
        .await
        .unwrap();
    let double = hotel
        .add_room(vec![factory.bed(BedKind::Double)])
        .await
        .unwrap();

    let booking = hotel
        .book_for_guest(guest.id(), 2, day(1), day(4))
        .await
        .unwrap();
    assert_eq!(booking.room_id(), double.id());
}

#[tokio::test]
async fn errors_classify_for_the_boundary_layer() {
    let hotel = Hotel::new();
    let mut factory = CommodityFactory::new();

    let guest = hotel
        .register_guest("Maria", "Petrova", Gender::Female)
        .await
        .unwrap();
    let room = hotel
        .add_room(vec![factory.bed(BedKind::Double)])
        .await
        .unwrap();
    hotel
        .book(CreateBooking::new(guest.id(), room.id(), 2, day(1), day(6)))
        .await
        .unwrap();

    let conflict = hotel
        .book(CreateBooking::new(guest.id(), room.id(), 2, day(3), day(8)))
        .await
        .unwrap_err();
    assert_eq!(conflict.kind(), ErrorKind::Conflict);

    let missing_guest = hotel
        .book(CreateBooking::new(GuestId::new(99), room.id(), 2, day(10), day(12)))
        .await
        .unwrap_err();
    assert_eq!(missing_guest.kind(), ErrorKind::NotFound);

    let bad_name = hotel
        .register_guest("Ma ria", "Petrova", Gender::Female)
        .await
        .unwrap_err();
    assert_eq!(bad_name.kind(), ErrorKind::InvalidArgument);

    let bedless = hotel
        .update_room(room.id(), vec![factory.toilet()])
        .await
        .unwrap_err();
    assert_eq!(bedless.kind(), ErrorKind::InvalidState);

    let duplicate = hotel
        .book(
            CreateBooking::new(guest.id(), room.id(), 2, day(20), day(22))
                .with_id(BookingId::new(1)),
        )
        .await
        .unwrap_err();
    assert_eq!(duplicate.kind(), ErrorKind::AlreadyExists);

    let missing_booking = hotel.get_booking(BookingId::new(77)).await.unwrap_err();
    assert!(matches!(missing_booking, HotelError::Booking(_)));
    assert_eq!(missing_booking.kind(), ErrorKind::NotFound);

    let missing_room = hotel.get_room(RoomId::new(44)).await.unwrap_err();
    assert_eq!(missing_room.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn capacity_invariant_holds_after_room_updates() {
    let hotel = Hotel::new();
    let mut factory = CommodityFactory::new();

    let room = hotel
        .add_room(vec![factory.bed(BedKind::Single), factory.bed(BedKind::Double)])
        .await
        .unwrap();
    assert_eq!(room.capacity(), 3);

    let updated = hotel
        .update_room(room.id(), vec![factory.bed(BedKind::KingSize)])
        .await
        .unwrap();
    assert_eq!(updated.capacity(), 2);

    for room in hotel.list_rooms().await {
        assert!(room.capacity() > 0);
    }
}
