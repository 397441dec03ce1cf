//! Room and room inventory types.
//!
//! Rooms are interchangeable units of capacity identified by a positive
//! number. The inventory is the fixed, ordered set of rooms a registry
//! allocates from.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A valid room number (1-65535).
///
/// Room 0 is rejected so that room numbers read the way a front desk
/// writes them.
///
/// # Examples
///
/// ```
/// use hotel::Room;
///
/// let room = Room::try_from(7).unwrap();
/// assert_eq!(room.number(), 7);
///
/// assert!(Room::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Room(u16);

impl Room {
    /// The smallest valid room number.
    pub const MIN: u16 = 1;

    /// Returns the underlying room number.
    #[must_use]
    pub const fn number(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Room {
    type Error = InvalidRoomError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(InvalidRoomError {
                value,
                reason: "room 0 is invalid".into(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Room> for u16 {
    fn from(room: Room) -> Self {
        room.0
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid room numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomError {
    /// The invalid room value.
    pub value: u16,
    /// The reason the room is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidRoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid room {}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidRoomError {}

/// The fixed set of rooms a hotel can hand out, in ascending order.
///
/// An inventory is never empty and never contains the same room twice.
///
/// # Examples
///
/// ```
/// use hotel::RoomInventory;
///
/// let inventory = RoomInventory::with_count(20).unwrap();
/// assert_eq!(inventory.len(), 20);
/// assert_eq!(inventory.iter().next().unwrap().number(), 1);
///
/// let custom = RoomInventory::from_ids([104, 101, 102]).unwrap();
/// let numbers: Vec<u16> = custom.iter().map(|r| r.number()).collect();
/// assert_eq!(numbers, vec![101, 102, 104]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    /// Number of rooms in the default inventory.
    pub const DEFAULT_COUNT: u16 = 20;

    /// Creates an inventory of rooms numbered `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn with_count(count: u16) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidInventory {
                reason: "room count must be at least 1".into(),
            });
        }

        Ok(Self {
            rooms: (Room::MIN..=count).map(Room).collect(),
        })
    }

    /// Creates an inventory from an explicit list of room numbers.
    ///
    /// The numbers are sorted ascending; the input order does not matter.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains room 0, or contains
    /// a duplicate.
    pub fn from_ids(ids: impl IntoIterator<Item = u16>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for id in ids {
            let room = Room::try_from(id)?;
            if !seen.insert(room) {
                return Err(Error::InvalidInventory {
                    reason: format!("room {room} listed more than once"),
                });
            }
        }

        if seen.is_empty() {
            return Err(Error::InvalidInventory {
                reason: "inventory must contain at least one room".into(),
            });
        }

        Ok(Self {
            rooms: seen.into_iter().collect(),
        })
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the inventory holds no rooms.
    ///
    /// Construction rejects empty inventories, so this is always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns `true` if the room belongs to this hotel.
    #[must_use]
    pub fn contains(&self, room: Room) -> bool {
        self.rooms.binary_search(&room).is_ok()
    }

    /// Iterates the rooms in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Room> + '_ {
        self.rooms.iter().copied()
    }

    /// Returns the rooms as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }
}

impl Default for RoomInventory {
    fn default() -> Self {
        Self {
            rooms: (Room::MIN..=Self::DEFAULT_COUNT).map(Room).collect(),
        }
    }
}

impl fmt::Display for RoomInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rooms.first(), self.rooms.last()) {
            (Some(first), Some(last)) => {
                write!(f, "{} room(s), {first}..={last}", self.rooms.len())
            }
            _ => write!(f, "no rooms"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_validation() {
        assert!(Room::try_from(0).is_err());
        assert!(Room::try_from(1).is_ok());
        assert!(Room::try_from(u16::MAX).is_ok());
    }

    #[test]
    fn test_room_error_reason() {
        let err = Room::try_from(0).unwrap_err();
        assert_eq!(err.value, 0);
        assert!(format!("{err}").contains("room 0 is invalid"));
    }

    #[test]
    fn test_room_ordering() {
        let low = Room::try_from(2).unwrap();
        let high = Room::try_from(11).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_default_inventory_has_twenty_rooms() {
        let inventory = RoomInventory::default();
        assert_eq!(inventory.len(), 20);
        let numbers: Vec<u16> = inventory.iter().map(Room::number).collect();
        assert_eq!(numbers, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_with_count_zero_rejected() {
        let result = RoomInventory::with_count(0);
        assert!(matches!(result, Err(Error::InvalidInventory { .. })));
    }

    #[test]
    fn test_from_ids_sorts() {
        let inventory = RoomInventory::from_ids([9, 3, 5]).unwrap();
        let numbers: Vec<u16> = inventory.iter().map(Room::number).collect();
        assert_eq!(numbers, vec![3, 5, 9]);
    }

    #[test]
    fn test_from_ids_rejects_duplicates() {
        let result = RoomInventory::from_ids([1, 2, 2]);
        assert!(matches!(result, Err(Error::InvalidInventory { .. })));
    }

    #[test]
    fn test_from_ids_rejects_zero_and_empty() {
        assert!(matches!(
            RoomInventory::from_ids([0, 1]),
            Err(Error::InvalidRoom { value: 0, .. })
        ));
        assert!(RoomInventory::from_ids(Vec::new()).is_err());
    }

    #[test]
    fn test_contains() {
        let inventory = RoomInventory::from_ids([101, 102]).unwrap();
        assert!(inventory.contains(Room::try_from(101).unwrap()));
        assert!(!inventory.contains(Room::try_from(1).unwrap()));
    }

    #[test]
    fn test_display() {
        let inventory = RoomInventory::with_count(3).unwrap();
        assert_eq!(format!("{inventory}"), "3 room(s), 1..=3");
    }

    #[test]
    fn test_room_serde() {
        let room = Room::try_from(12).unwrap();
        assert_eq!(serde_json::to_string(&room).unwrap(), "12");
        assert_eq!(serde_json::from_str::<Room>("12").unwrap(), room);
        assert!(serde_json::from_str::<Room>("0").is_err());
    }
}
