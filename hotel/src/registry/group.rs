//! Block reservations: rooms held for a group and handed out over time.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::block::Block;
use crate::booking::Booking;
use crate::date_range::DateRange;
use crate::error::{Error, Result};
use crate::registry::allocator::AllocationResult;
use crate::registry::Registry;
use crate::room::Room;

impl Registry {
    /// Holds the `room_count` lowest-numbered free rooms for a group.
    ///
    /// The block's rooms immediately disappear from
    /// [`Registry::available_rooms_for`] for its dates.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidBlockSize`] if `room_count` is outside
    ///   `1..=max_block_size`
    /// - [`Error::InvalidDateRange`] for inverted dates
    /// - [`Error::NoRoomsAvailable`] if no room is free at all
    /// - [`Error::InsufficientRooms`] if some, but fewer than `room_count`,
    ///   rooms are free
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotel::Registry;
    ///
    /// let feb = |d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
    /// let mut hotel = Registry::default();
    ///
    /// let block = hotel.reserve_block("Group1", feb(1), feb(3), 3).unwrap();
    /// let rooms: Vec<u16> = block.reserved_rooms().iter().map(|r| r.number()).collect();
    /// assert_eq!(rooms, vec![1, 2, 3]);
    /// ```
    pub fn reserve_block(
        &mut self,
        group_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
        room_count: usize,
    ) -> Result<&Block> {
        if room_count == 0 || room_count > self.max_block_size {
            return Err(Error::InvalidBlockSize {
                requested: room_count,
                max: self.max_block_size,
            });
        }

        let range = DateRange::new(check_in, check_out);
        let rooms: BTreeSet<Room> =
            match self
                .allocator()
                .allocate(&range, &self.bookings, room_count)?
            {
                AllocationResult::Allocated(rooms) => rooms.into_iter().collect(),
                AllocationResult::Exhausted => {
                    log::debug!("No rooms free for block '{group_name}' over {range}");
                    return Err(Error::NoRoomsAvailable { range });
                }
                AllocationResult::Insufficient {
                    requested,
                    available,
                } => {
                    log::debug!(
                        "Block '{group_name}' wants {requested} room(s), only {available} free"
                    );
                    return Err(Error::InsufficientRooms {
                        requested,
                        available,
                    });
                }
            };

        let block = Block::new(group_name, range, rooms)?;
        log::info!(
            "Reserved block '{}' of {} room(s) over {range}",
            block.group_name(),
            block.reserved_rooms().len()
        );

        let position = self.bookings.len();
        self.block_positions.push(position);
        self.bookings.push(Booking::Block(block));
        self.bookings
            .get(position)
            .and_then(Booking::as_block)
            .ok_or_else(|| Self::block_not_found(group_name))
    }

    /// Blocks only, in booking order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.block_positions
            .iter()
            .filter_map(|&position| self.bookings.get(position).and_then(Booking::as_block))
    }

    /// Finds the first block reserved under `group_name`, trimmed the same
    /// way group names are when reserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no block matches.
    pub fn find_block(&self, group_name: &str) -> Result<&Block> {
        let wanted = group_name.trim();
        self.blocks()
            .find(|block| block.group_name() == wanted)
            .ok_or_else(|| Self::block_not_found(group_name))
    }

    /// Rooms in the named block not yet handed out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the block does not exist, or
    /// [`Error::BlockFullyBooked`] if every room has been handed out.
    pub fn available_rooms_in_block(&self, group_name: &str) -> Result<&BTreeSet<Room>> {
        let block = self.find_block(group_name)?;
        if block.is_fully_booked() {
            return Err(Error::BlockFullyBooked {
                group: block.group_name().to_string(),
            });
        }
        Ok(block.available_rooms())
    }

    /// Hands out `count` rooms from the named block, lowest-numbered first.
    ///
    /// Returns the rooms handed out. The block's reserved rooms are unchanged;
    /// only its availability shrinks.
    ///
    /// # Errors
    ///
    /// - [`Error::NotFound`] if the block does not exist
    /// - [`Error::BlockFullyBooked`] if the block has nothing left
    /// - [`Error::InvalidBookingCount`] if `count` is zero or exceeds the
    ///   rooms remaining
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use hotel::{Error, Registry};
    ///
    /// let feb = |d| NaiveDate::from_ymd_opt(2024, 2, d).unwrap();
    /// let mut hotel = Registry::default();
    /// hotel.reserve_block("Group1", feb(1), feb(3), 3).unwrap();
    ///
    /// let taken = hotel.reserve_room_in_block("Group1", 2).unwrap();
    /// assert_eq!(taken.iter().map(|r| r.number()).collect::<Vec<_>>(), vec![1, 2]);
    ///
    /// let err = hotel.reserve_room_in_block("Group1", 2).unwrap_err();
    /// assert!(matches!(err, Error::InvalidBookingCount { requested: 2, available: 1 }));
    /// ```
    pub fn reserve_room_in_block(&mut self, group_name: &str, count: usize) -> Result<Vec<Room>> {
        self.take_block_rooms(group_name, None, count)
    }

    /// Like [`Registry::reserve_room_in_block`], recording the guest the
    /// rooms went to.
    ///
    /// # Errors
    ///
    /// Same as [`Registry::reserve_room_in_block`], plus a validation error
    /// if `guest_name` is blank.
    pub fn reserve_room_in_block_for(
        &mut self,
        group_name: &str,
        guest_name: &str,
        count: usize,
    ) -> Result<Vec<Room>> {
        self.take_block_rooms(group_name, Some(guest_name), count)
    }

    fn take_block_rooms(
        &mut self,
        group_name: &str,
        guest_name: Option<&str>,
        count: usize,
    ) -> Result<Vec<Room>> {
        let block = self.find_block_mut(group_name)?;
        if block.is_fully_booked() {
            return Err(Error::BlockFullyBooked {
                group: block.group_name().to_string(),
            });
        }

        let taken = block.take_rooms(count, guest_name)?;
        log::info!(
            "Handed out {} room(s) from block '{}', {} remaining",
            taken.len(),
            block.group_name(),
            block.available_rooms().len()
        );
        if block.is_fully_booked() {
            log::info!("Block '{}' is now fully booked", block.group_name());
        }

        Ok(taken)
    }

    fn find_block_mut(&mut self, group_name: &str) -> Result<&mut Block> {
        let wanted = group_name.trim();
        let position = self
            .block_positions
            .iter()
            .copied()
            .find(|&position| {
                matches!(
                    self.bookings.get(position),
                    Some(Booking::Block(block)) if block.group_name() == wanted
                )
            })
            .ok_or_else(|| Self::block_not_found(group_name))?;

        match self.bookings.get_mut(position) {
            Some(Booking::Block(block)) => Ok(block),
            _ => Err(Self::block_not_found(group_name)),
        }
    }

    fn block_not_found(group_name: &str) -> Error {
        Error::NotFound {
            resource: format!("block for '{group_name}'"),
        }
    }
}
