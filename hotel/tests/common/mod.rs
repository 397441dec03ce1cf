//! Common test utilities for integration tests.
//!
//! This module provides date helpers and registry fixtures shared by the
//! integration test binaries.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use hotel::{Registry, Room};

/// Parses a `YYYY-MM-DD` date, panicking on malformed input.
#[allow(dead_code)]
pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

/// Room numbers of a room collection, in iteration order.
#[allow(dead_code)]
pub fn numbers<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Vec<u16> {
    rooms.into_iter().map(|room| room.number()).collect()
}

/// Room numbers of an owned room set.
#[allow(dead_code)]
pub fn set_numbers(rooms: &BTreeSet<Room>) -> Vec<u16> {
    numbers(rooms)
}

/// Builder for registries pre-populated with bookings.
///
/// # Examples
///
/// ```no_run
/// # use common::RegistryFixture;
/// let registry = RegistryFixture::new()
///     .with_rooms(5)
///     .with_reservation("Ada", "2024-01-01", "2024-01-03")
///     .build();
/// ```
#[allow(dead_code)]
pub struct RegistryFixture {
    rooms: u16,
    reservations: Vec<(String, String, String)>,
    blocks: Vec<(String, String, String, usize)>,
}

#[allow(dead_code)]
impl RegistryFixture {
    /// Starts from the default 20-room hotel with no bookings.
    pub fn new() -> Self {
        Self {
            rooms: 20,
            reservations: Vec::new(),
            blocks: Vec::new(),
        }
    }

    /// Sets the number of rooms.
    pub fn with_rooms(mut self, rooms: u16) -> Self {
        self.rooms = rooms;
        self
    }

    /// Adds an individual reservation.
    pub fn with_reservation(mut self, guest: &str, check_in: &str, check_out: &str) -> Self {
        self.reservations
            .push((guest.into(), check_in.into(), check_out.into()));
        self
    }

    /// Adds a block.
    pub fn with_block(
        mut self,
        group: &str,
        check_in: &str,
        check_out: &str,
        rooms: usize,
    ) -> Self {
        self.blocks
            .push((group.into(), check_in.into(), check_out.into(), rooms));
        self
    }

    /// Builds the registry, applying reservations before blocks.
    pub fn build(self) -> Registry {
        let mut registry = Registry::with_room_count(self.rooms).unwrap();
        for (guest, check_in, check_out) in &self.reservations {
            registry
                .create_reservation(guest, date(check_in), date(check_out))
                .unwrap();
        }
        for (group, check_in, check_out, rooms) in &self.blocks {
            registry
                .reserve_block(group, date(check_in), date(check_out), *rooms)
                .unwrap();
        }
        registry
    }
}

impl Default for RegistryFixture {
    fn default() -> Self {
        Self::new()
    }
}
