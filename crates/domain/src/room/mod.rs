//! Room directory: validation, lookup, and capacity computation over the
//! room store.

mod commodity;
mod model;
mod service;

pub use commodity::{BedKind, Commodity, CommodityFactory, CommodityKind, InventoryId};
pub use model::Room;
pub use service::{RoomDirectory, RoomService};

use common::RoomId;
use store::StoreError;
use thiserror::Error;

/// Errors from room directory operations.
#[derive(Debug, Error)]
pub enum RoomError {
    /// Rooms must be furnished with at least one commodity.
    #[error("room has no commodities")]
    NoCommodities,

    /// The commodity set sleeps nobody, which no room may do.
    #[error("room commodities provide no sleeping capacity")]
    ZeroCapacity,

    /// No room carries the given id.
    #[error("room {id} was not found")]
    NotFound { id: RoomId },

    /// The underlying store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
