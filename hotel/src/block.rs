//! Room blocks held for groups.
//!
//! A block withholds a handful of rooms from the public for a date range.
//! An administrator then hands those rooms out to members of the group;
//! the block's `available_rooms` shrinks as they do, while `reserved_rooms`
//! stays fixed for the block's lifetime.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::reservation::validate_name;
use crate::room::Room;

/// One room handed out from a block.
///
/// Sub-bookings are not standalone reservations; they are an audit trail of
/// which block rooms went to whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockBooking {
    /// The room handed out.
    pub room: Room,
    /// The guest it went to, if one was named.
    pub guest_name: Option<String>,
}

/// A group's allocation of rooms for a shared date range.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use hotel::{Block, DateRange, Room};
///
/// let range = DateRange::parse("2024-02-01", "2024-02-03").unwrap();
/// let rooms: BTreeSet<Room> = [1, 2, 3].into_iter().map(|n| Room::try_from(n).unwrap()).collect();
/// let mut block = Block::new("Group1", range, rooms).unwrap();
///
/// let taken = block.take_rooms(2, None).unwrap();
/// assert_eq!(taken.len(), 2);
/// assert_eq!(block.available_rooms().len(), 1);
/// assert_eq!(block.reserved_rooms().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BlockRecord")]
pub struct Block {
    group_name: String,
    range: DateRange,
    reserved_rooms: BTreeSet<Room>,
    available_rooms: BTreeSet<Room>,
    sub_bookings: Vec<BlockBooking>,
}

/// Unchecked wire form of [`Block`].
#[derive(Deserialize)]
struct BlockRecord {
    group_name: String,
    range: DateRange,
    reserved_rooms: BTreeSet<Room>,
    available_rooms: BTreeSet<Room>,
    sub_bookings: Vec<BlockBooking>,
}

impl TryFrom<BlockRecord> for Block {
    type Error = Error;

    fn try_from(record: BlockRecord) -> Result<Self> {
        let mut block = Self::new(record.group_name, record.range, record.reserved_rooms)?;

        // Every reserved room is either still available or handed out once.
        let mut handed_out = BTreeSet::new();
        for sub in &record.sub_bookings {
            if !block.reserved_rooms.contains(&sub.room) || !handed_out.insert(sub.room) {
                return Err(inconsistent_block(format!(
                    "room {} handed out twice or not in the block",
                    sub.room
                )));
            }
        }
        let expected: BTreeSet<Room> = block
            .reserved_rooms
            .difference(&handed_out)
            .copied()
            .collect();
        if record.available_rooms != expected {
            return Err(inconsistent_block(
                "available rooms must be the reserved rooms not yet handed out".into(),
            ));
        }

        block.available_rooms = record.available_rooms;
        block.sub_bookings = record.sub_bookings;
        Ok(block)
    }
}

fn inconsistent_block(message: String) -> Error {
    Error::Validation {
        field: "block".into(),
        message,
    }
}

impl Block {
    /// Creates a block whose rooms are all still available.
    ///
    /// # Errors
    ///
    /// Returns an error if the group name is empty after trimming or if
    /// `rooms` is empty.
    pub fn new(
        group_name: impl Into<String>,
        range: DateRange,
        rooms: BTreeSet<Room>,
    ) -> Result<Self> {
        let group_name = validate_name("group_name", group_name.into())?;
        if rooms.is_empty() {
            return Err(Error::Validation {
                field: "reserved_rooms".into(),
                message: "a block must hold at least one room".into(),
            });
        }

        Ok(Self {
            group_name,
            range,
            available_rooms: rooms.clone(),
            reserved_rooms: rooms,
            sub_bookings: Vec::new(),
        })
    }

    /// Returns the group's name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    /// Returns the block's stay.
    #[must_use]
    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    /// Every room allocated to the block when it was created.
    #[must_use]
    pub const fn reserved_rooms(&self) -> &BTreeSet<Room> {
        &self.reserved_rooms
    }

    /// Rooms in the block not yet handed out.
    #[must_use]
    pub const fn available_rooms(&self) -> &BTreeSet<Room> {
        &self.available_rooms
    }

    /// Rooms handed out so far, in the order they were handed out.
    #[must_use]
    pub fn sub_bookings(&self) -> &[BlockBooking] {
        &self.sub_bookings
    }

    /// Returns `true` once every room in the block has been handed out.
    #[must_use]
    pub fn is_fully_booked(&self) -> bool {
        self.available_rooms.is_empty()
    }

    /// Hands out the `count` lowest-numbered available rooms.
    ///
    /// The rooms move out of `available_rooms` and are recorded as
    /// sub-bookings under `guest_name`. Nothing changes on error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBookingCount`] if `count` is zero or exceeds
    /// the rooms remaining, or a validation error if `guest_name` is given
    /// but blank.
    pub fn take_rooms(&mut self, count: usize, guest_name: Option<&str>) -> Result<Vec<Room>> {
        if count == 0 || count > self.available_rooms.len() {
            return Err(Error::InvalidBookingCount {
                requested: count,
                available: self.available_rooms.len(),
            });
        }

        let guest_name = guest_name
            .map(|name| validate_name("guest_name", name.to_string()))
            .transpose()?;

        let taken: Vec<Room> = self.available_rooms.iter().copied().take(count).collect();
        for room in &taken {
            self.available_rooms.remove(room);
            self.sub_bookings.push(BlockBooking {
                room: *room,
                guest_name: guest_name.clone(),
            });
        }

        Ok(taken)
    }
}
