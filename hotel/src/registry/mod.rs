//! The reservation registry.
//!
//! [`Registry`] is the hotel aggregate: it owns the room inventory and the
//! ordered booking ledger, and it is the only place bookings are created.
//! Individual reservations live here; block operations are in [`group`],
//! room selection in [`allocator`], and a lock-guarded handle for
//! concurrent callers in [`shared`].

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::booking::Booking;
use crate::config::Config;
use crate::date_range::{parse_date, DateRange};
use crate::error::{Error, Result};
use crate::reservation::Reservation;
use crate::room::{Room, RoomInventory};

pub mod allocator;
pub mod group;
pub mod shared;

#[cfg(test)]
mod proptests;

pub use allocator::{AllocationResult, RoomAllocator};
pub use shared::SharedRegistry;

/// Default upper bound on rooms per block.
pub const DEFAULT_MAX_BLOCK_SIZE: usize = 5;

/// The hotel: room inventory plus every booking made against it.
///
/// The ledger keeps individual reservations and blocks together in booking
/// order. Blocks are additionally indexed by position so block lookups do
/// not scan individual reservations.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotel::Registry;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let mut hotel = Registry::default();
///
/// let a = hotel.create_reservation("A", jan(1), jan(5)).unwrap().room();
/// let b = hotel.create_reservation("B", jan(1), jan(5)).unwrap().room();
/// let c = hotel.create_reservation("C", jan(5), jan(10)).unwrap().room();
///
/// assert_eq!((a.number(), b.number(), c.number()), (1, 2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    inventory: RoomInventory,
    max_block_size: usize,
    bookings: Vec<Booking>,
    block_positions: Vec<usize>,
}

impl Registry {
    /// Creates an empty registry over the given rooms.
    #[must_use]
    pub fn new(inventory: RoomInventory) -> Self {
        Self {
            inventory,
            max_block_size: DEFAULT_MAX_BLOCK_SIZE,
            bookings: Vec::new(),
            block_positions: Vec::new(),
        }
    }

    /// Creates an empty registry with rooms numbered `1..=count`.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero.
    pub fn with_room_count(count: u16) -> Result<Self> {
        Ok(Self::new(RoomInventory::with_count(count)?))
    }

    /// Builds a registry from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured rooms or block size are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::config::{Config, RoomConfig};
    /// use hotel::Registry;
    ///
    /// let config = Config {
    ///     rooms: Some(RoomConfig { count: Some(8), ids: None }),
    ///     max_block_size: Some(3),
    ///     ..Default::default()
    /// };
    /// let hotel = Registry::from_config(&config).unwrap();
    /// assert_eq!(hotel.rooms().len(), 8);
    /// assert_eq!(hotel.max_block_size(), 3);
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let inventory = match config.rooms.as_ref() {
            Some(rooms) => rooms.inventory()?,
            None => RoomInventory::default(),
        };

        let registry = Self::new(inventory);
        match config.max_block_size {
            Some(size) => registry.with_max_block_size(usize::from(size)),
            None => Ok(registry),
        }
    }

    /// Sets the largest block this registry will create.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `size` is zero.
    pub fn with_max_block_size(mut self, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::Validation {
                field: "max_block_size".into(),
                message: "blocks must be allowed at least one room".into(),
            });
        }
        self.max_block_size = size;
        Ok(self)
    }

    /// The hotel's rooms, ascending.
    #[must_use]
    pub const fn rooms(&self) -> &RoomInventory {
        &self.inventory
    }

    /// The largest block this registry will create.
    #[must_use]
    pub const fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Every booking, individual and block, in booking order.
    #[must_use]
    pub fn all_bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Individual reservations only, in booking order.
    pub fn reservations(&self) -> impl Iterator<Item = &Reservation> + '_ {
        self.bookings.iter().filter_map(Booking::as_reservation)
    }

    fn allocator(&self) -> RoomAllocator<'_> {
        RoomAllocator::new(&self.inventory)
    }

    /// Rooms free for the whole of `[check_in, check_out)`.
    ///
    /// Rooms held by blocks overlapping the range are never free, even if
    /// the block has not handed them out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if `check_in` is after `check_out`.
    pub fn available_rooms_for(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<BTreeSet<Room>> {
        self.allocator()
            .available_rooms(&DateRange::new(check_in, check_out), &self.bookings)
    }

    /// Books the lowest-numbered free room for a guest.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] for inverted dates,
    /// [`Error::NoRoomsAvailable`] if every room is taken, or a validation
    /// error if the guest name is blank.
    pub fn create_reservation(
        &mut self,
        guest_name: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<&Reservation> {
        let range = DateRange::new(check_in, check_out);

        let Some(room) = self.allocator().allocate_single(&range, &self.bookings)? else {
            log::debug!("No room free for '{guest_name}' over {range}");
            return Err(Error::NoRoomsAvailable { range });
        };

        let reservation = Reservation::new(guest_name, room, range)?;
        log::info!(
            "Reserved room {room} for '{}' over {range}",
            reservation.guest_name()
        );

        let position = self.bookings.len();
        self.bookings.push(Booking::Individual(reservation));
        self.bookings
            .get(position)
            .and_then(Booking::as_reservation)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation for '{guest_name}'"),
            })
    }

    /// Finds the first individual reservation made under `guest_name`.
    ///
    /// Blocks are never matched, even if a group shares the name. The
    /// query is trimmed the same way names are when booked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation matches.
    pub fn find_reservation(&self, guest_name: &str) -> Result<&Reservation> {
        let wanted = guest_name.trim();
        self.reservations()
            .find(|reservation| reservation.guest_name() == wanted)
            .ok_or_else(|| Error::NotFound {
                resource: format!("reservation for '{guest_name}'"),
            })
    }

    /// Every booking, individual or block, with `date` as one of its nights.
    #[must_use]
    pub fn bookings_on(&self, date: NaiveDate) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.is_active_on(date))
            .collect()
    }

    /// Like [`Registry::bookings_on`], parsing a `YYYY-MM-DD` date first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the date cannot be parsed.
    pub fn bookings_on_str(&self, date: &str) -> Result<Vec<&Booking>> {
        Ok(self.bookings_on(parse_date(date)?))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RoomInventory::default())
    }
}
