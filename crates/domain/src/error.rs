//! Error taxonomy shared with the boundary layer.
//!
//! Every error the services produce classifies into one [`ErrorKind`], which
//! is what a transport layer translates into a protocol response. The
//! services themselves never retry or recover — failures surface
//! immediately.

use store::StoreError;
use thiserror::Error;

use crate::booking::BookingError;
use crate::guest::GuestError;
use crate::room::RoomError;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input reached a core operation.
    InvalidArgument,
    /// A guest, room, or booking reference did not resolve.
    NotFound,
    /// An explicitly chosen id is already taken.
    AlreadyExists,
    /// A room-availability overlap was detected.
    Conflict,
    /// The operation would leave an entity violating its invariants.
    InvalidState,
}

/// Any error the hotel services can produce.
#[derive(Debug, Error)]
pub enum HotelError {
    #[error(transparent)]
    Guest(#[from] GuestError),

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl HotelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HotelError::Guest(e) => e.kind(),
            HotelError::Room(e) => e.kind(),
            HotelError::Booking(e) => e.kind(),
            HotelError::Store(e) => store_kind(e),
        }
    }
}

impl GuestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GuestError::InvalidName { .. } => ErrorKind::InvalidArgument,
            GuestError::NotFound { .. } => ErrorKind::NotFound,
            GuestError::Store(e) => store_kind(e),
        }
    }
}

impl RoomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RoomError::NoCommodities => ErrorKind::InvalidArgument,
            RoomError::ZeroCapacity => ErrorKind::InvalidState,
            RoomError::NotFound { .. } => ErrorKind::NotFound,
            RoomError::Store(e) => store_kind(e),
        }
    }
}

impl BookingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookingError::InvalidId { .. }
            | BookingError::CapacityMismatch { .. }
            | BookingError::InvalidPeriod { .. }
            | BookingError::CheckInPast { .. } => ErrorKind::InvalidArgument,
            BookingError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            BookingError::GuestNotFound { .. }
            | BookingError::RoomNotFound { .. }
            | BookingError::NoRoomAvailable { .. }
            | BookingError::NotFound { .. } => ErrorKind::NotFound,
            BookingError::RoomUnavailable { .. } => ErrorKind::Conflict,
            BookingError::Store(e) => store_kind(e),
        }
    }
}

fn store_kind(error: &StoreError) -> ErrorKind {
    match error {
        StoreError::NotFound { .. } => ErrorKind::NotFound,
        StoreError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
    }
}
