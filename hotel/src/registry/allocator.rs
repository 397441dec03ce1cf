//! Room allocation against the booking ledger.
//!
//! The allocator is stateless: it borrows the inventory and is handed the
//! current bookings on every call. Rooms are always chosen in ascending
//! numeric order so that the same sequence of requests always produces the
//! same assignments.

use std::collections::BTreeSet;

use crate::booking::Booking;
use crate::date_range::DateRange;
use crate::room::{Room, RoomInventory};
use crate::Result;

/// Result of a room allocation attempt.
///
/// # Examples
///
/// ```
/// use hotel::registry::allocator::AllocationResult;
/// use hotel::Room;
///
/// let result = AllocationResult::Allocated(vec![Room::try_from(1).unwrap()]);
/// match result {
///     AllocationResult::Allocated(rooms) => println!("Allocated {} room(s)", rooms.len()),
///     _ => println!("Allocation failed"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocationResult {
    /// The rooms picked, ascending.
    Allocated(Vec<Room>),
    /// Not a single room is free for the range.
    Exhausted,
    /// Some rooms are free, but fewer than requested.
    Insufficient {
        /// Rooms asked for.
        requested: usize,
        /// Rooms free for the range.
        available: usize,
    },
}

/// Lowest-numbered-first room allocator.
///
/// # Examples
///
/// ```
/// use hotel::registry::allocator::{AllocationResult, RoomAllocator};
/// use hotel::{Booking, DateRange, RoomInventory};
///
/// let inventory = RoomInventory::with_count(3).unwrap();
/// let allocator = RoomAllocator::new(&inventory);
/// let range = DateRange::parse("2024-01-01", "2024-01-05").unwrap();
///
/// let bookings: Vec<Booking> = Vec::new();
/// let result = allocator.allocate(&range, &bookings, 2).unwrap();
/// let numbers: Vec<u16> = match result {
///     AllocationResult::Allocated(rooms) => rooms.iter().map(|r| r.number()).collect(),
///     _ => unreachable!(),
/// };
/// assert_eq!(numbers, vec![1, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RoomAllocator<'a> {
    inventory: &'a RoomInventory,
}

impl<'a> RoomAllocator<'a> {
    /// Creates an allocator over the given inventory.
    #[must_use]
    pub const fn new(inventory: &'a RoomInventory) -> Self {
        Self { inventory }
    }

    /// Rooms not held by any booking overlapping `range`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDateRange`] if the range is inverted.
    pub fn available_rooms(
        &self,
        range: &DateRange,
        bookings: &[Booking],
    ) -> Result<BTreeSet<Room>> {
        range.validate()?;

        let occupied = range.occupied_rooms(bookings);
        if occupied.is_empty() {
            return Ok(self.inventory.iter().collect());
        }

        Ok(self
            .inventory
            .iter()
            .filter(|room| !occupied.contains(room))
            .collect())
    }

    /// Picks the `count` lowest-numbered rooms free for `range`.
    ///
    /// Never returns a partial allocation: either exactly `count` rooms are
    /// picked, or the result explains why not.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDateRange`] if the range is inverted.
    pub fn allocate(
        &self,
        range: &DateRange,
        bookings: &[Booking],
        count: usize,
    ) -> Result<AllocationResult> {
        let available = self.available_rooms(range, bookings)?;

        if available.is_empty() {
            return Ok(AllocationResult::Exhausted);
        }

        if available.len() < count {
            return Ok(AllocationResult::Insufficient {
                requested: count,
                available: available.len(),
            });
        }

        Ok(AllocationResult::Allocated(
            available.into_iter().take(count).collect(),
        ))
    }

    /// Picks the single lowest-numbered room free for `range`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDateRange`] if the range is inverted.
    pub fn allocate_single(&self, range: &DateRange, bookings: &[Booking]) -> Result<Option<Room>> {
        match self.allocate(range, bookings, 1)? {
            AllocationResult::Allocated(rooms) => Ok(rooms.first().copied()),
            AllocationResult::Exhausted | AllocationResult::Insufficient { .. } => Ok(None),
        }
    }
}
