use thiserror::Error;

/// Errors surfaced by identity-keyed stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No stored record carries the given id.
    #[error("{kind} with id {id} was not found")]
    NotFound { kind: &'static str, id: u32 },

    /// A record with the given id is already stored.
    #[error("{kind} with id {id} already exists")]
    AlreadyExists { kind: &'static str, id: u32 },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
