//! Guest directory: validation and lookup over the guest store.

mod model;
mod service;

pub use model::{Gender, Guest};
pub use service::{GuestDirectory, GuestService};

use common::GuestId;
use store::StoreError;
use thiserror::Error;

/// Errors from guest directory operations.
#[derive(Debug, Error)]
pub enum GuestError {
    /// A name was empty or contained whitespace.
    #[error("invalid guest name {name:?}: names must be non-empty and free of whitespace")]
    InvalidName { name: String },

    /// No guest carries the given id.
    #[error("guest {id} was not found")]
    NotFound { id: GuestId },

    /// The underlying store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
