//! Individual reservation records.
//!
//! A reservation ties one guest to one room for one stay. Reservations are
//! created by the registry and never change afterwards.

use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::room::Room;

/// A single guest's claim on a single room.
///
/// # Examples
///
/// ```
/// use hotel::{DateRange, Reservation, Room};
///
/// let range = DateRange::parse("2024-01-01", "2024-01-05").unwrap();
/// let reservation = Reservation::new("  Ada  ", Room::try_from(1).unwrap(), range).unwrap();
///
/// assert_eq!(reservation.guest_name(), "Ada");
/// assert_eq!(reservation.room().number(), 1);
/// assert_eq!(reservation.range().nights(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    guest_name: String,
    room: Room,
    range: DateRange,
}

impl Reservation {
    /// Creates a reservation record.
    ///
    /// The guest name is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest name is empty after trimming.
    pub fn new(
        guest_name: impl Into<String>,
        room: Room,
        range: DateRange,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            guest_name: validate_name("guest_name", guest_name.into())?,
            room,
            range,
        })
    }

    /// Returns the guest's name.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    /// Returns the assigned room.
    #[must_use]
    pub const fn room(&self) -> Room {
        self.room
    }

    /// Returns the reserved stay.
    #[must_use]
    pub const fn range(&self) -> &DateRange {
        &self.range
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Trims a guest or group name and rejects it if nothing remains.
pub(crate) fn validate_name(field: &str, name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError {
            field: field.into(),
            message: format!("{field} must be non-empty after trimming whitespace"),
        });
    }
    Ok(trimmed.to_string())
}
