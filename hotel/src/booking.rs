//! The unified booking ledger entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::date_range::DateRange;
use crate::reservation::Reservation;
use crate::room::Room;

/// An entry in the registry's booking ledger.
///
/// Individual reservations and group blocks share one ordered list so that
/// availability checks see both without special cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Booking {
    /// A single guest in a single room.
    Individual(Reservation),
    /// Rooms held for a group.
    Block(Block),
}

impl Booking {
    /// Guest name for individual bookings, group name for blocks.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Individual(reservation) => reservation.guest_name(),
            Self::Block(block) => block.group_name(),
        }
    }

    /// The booked stay.
    #[must_use]
    pub fn range(&self) -> &DateRange {
        match self {
            Self::Individual(reservation) => reservation.range(),
            Self::Block(block) => block.range(),
        }
    }

    /// Rooms withheld from public availability by this booking.
    ///
    /// For a block this is every reserved room, handed out or not.
    pub fn rooms(&self) -> Box<dyn Iterator<Item = Room> + '_> {
        match self {
            Self::Individual(reservation) => Box::new(std::iter::once(reservation.room())),
            Self::Block(block) => Box::new(block.reserved_rooms().iter().copied()),
        }
    }

    /// Returns `true` if `date` is a night of this booking.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }

    /// Returns the reservation if this is an individual booking.
    #[must_use]
    pub fn as_reservation(&self) -> Option<&Reservation> {
        match self {
            Self::Individual(reservation) => Some(reservation),
            Self::Block(_) => None,
        }
    }

    /// Returns the block if this is a block booking.
    #[must_use]
    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Self::Block(block) => Some(block),
            Self::Individual(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn room(n: u16) -> Room {
        Room::try_from(n).unwrap()
    }

    #[test]
    fn test_individual_accessors() {
        let range = DateRange::new(date(1), date(4));
        let booking = Booking::Individual(Reservation::new("Ada", room(2), range).unwrap());

        assert_eq!(booking.name(), "Ada");
        assert_eq!(booking.range(), &range);
        assert_eq!(booking.rooms().collect::<Vec<_>>(), vec![room(2)]);
        assert!(booking.as_reservation().is_some());
        assert!(booking.as_block().is_none());
    }

    #[test]
    fn test_block_accessors() {
        let range = DateRange::new(date(1), date(4));
        let reserved: BTreeSet<Room> = [room(1), room(2)].into_iter().collect();
        let booking = Booking::Block(Block::new("Choir", range, reserved).unwrap());

        assert_eq!(booking.name(), "Choir");
        assert_eq!(booking.rooms().count(), 2);
        assert!(booking.as_block().is_some());
        assert!(booking.as_reservation().is_none());
    }

    #[test]
    fn test_is_active_on() {
        let range = DateRange::new(date(1), date(4));
        let booking = Booking::Individual(Reservation::new("Ada", room(2), range).unwrap());

        assert!(booking.is_active_on(date(1)));
        assert!(booking.is_active_on(date(3)));
        assert!(!booking.is_active_on(date(4)));
    }

    #[test]
    fn test_serde_tagging() {
        let range = DateRange::new(date(1), date(4));
        let booking = Booking::Individual(Reservation::new("Ada", room(2), range).unwrap());
        let json = serde_json::to_string(&booking).unwrap();
        assert!(json.contains("\"kind\":\"individual\""));
    }
}
