//! Error types for the hotel library.
//!
//! This module provides the error hierarchy for every registry, date and
//! configuration operation, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use crate::date_range::DateRange;

/// Result type alias for operations that may fail with a hotel error.
///
/// # Examples
///
/// ```
/// use hotel::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(20)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hotel library.
///
/// Every failing operation reports exactly one of these variants and leaves
/// the registry untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// The check-in date falls after the check-out date.
    #[error("invalid date range: check-in {check_in} is after check-out {check_out}")]
    InvalidDateRange {
        /// The requested check-in date.
        check_in: NaiveDate,
        /// The requested check-out date.
        check_out: NaiveDate,
    },

    /// A date string could not be parsed.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The raw input.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Every room is taken for the requested range.
    #[error("no rooms available for {range}")]
    NoRoomsAvailable {
        /// The requested stay.
        range: DateRange,
    },

    /// A block was requested with a room count outside the allowed bounds.
    #[error("invalid block size {requested}: blocks hold between 1 and {max} rooms")]
    InvalidBlockSize {
        /// The requested number of rooms.
        requested: usize,
        /// The configured upper bound.
        max: usize,
    },

    /// Fewer rooms are free than the block asks for.
    #[error("insufficient rooms: requested {requested}, only {available} available")]
    InsufficientRooms {
        /// The requested number of rooms.
        requested: usize,
        /// The number of free rooms for the range.
        available: usize,
    },

    /// An in-block booking asked for zero rooms or more than remain.
    #[error("invalid booking count {requested}: block has {available} room(s) remaining")]
    InvalidBookingCount {
        /// The requested number of rooms.
        requested: usize,
        /// Rooms still available inside the block.
        available: usize,
    },

    /// The block has no rooms left to hand out.
    #[error("block '{group}' is fully booked")]
    BlockFullyBooked {
        /// The block's group name.
        group: String,
    },

    /// A lookup by guest or group name matched nothing.
    #[error("not found: {resource}")]
    NotFound {
        /// Description of what was looked up.
        resource: String,
    },

    /// An invalid room number was provided.
    #[error("invalid room {value}: {reason}")]
    InvalidRoom {
        /// The invalid room value.
        value: u16,
        /// The reason the room is invalid.
        reason: String,
    },

    /// A room inventory could not be built.
    #[error("invalid room inventory: {reason}")]
    InvalidInventory {
        /// The reason the inventory is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A thread panicked while holding the shared registry lock.
    #[error("registry lock poisoned")]
    LockPoisoned,
}

impl From<crate::room::InvalidRoomError> for Error {
    fn from(err: crate::room::InvalidRoomError) -> Self {
        Self::InvalidRoom {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error is a failed lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation for 'Ada'".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error means the hotel or a block ran out of rooms.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::Error;
    ///
    /// let err = Error::BlockFullyBooked { group: "Wedding".into() };
    /// assert!(err.is_capacity_error());
    /// ```
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        matches!(
            self,
            Self::NoRoomsAvailable { .. }
                | Self::InsufficientRooms { .. }
                | Self::BlockFullyBooked { .. }
        )
    }
}
