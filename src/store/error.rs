//! Store error types
//!
//! Defines all errors that can occur in the storage layer.

use thiserror::Error;

/// Errors that can occur in the hotel store
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite statement or transaction failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O operation failed (creating the data directory)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Booking referenced a client that does not exist
    #[error("Client not found: {0}")]
    ClientNotFound(i64),

    /// Booking referenced a room that does not exist
    #[error("Room not found: {0}")]
    RoomNotFound(i64),

    /// Booking referenced a room that is already occupied
    #[error("Room {0} is not available")]
    RoomUnavailable(i64),

    /// The shared connection lock was poisoned
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
