//! Property-based tests for the registry.
//!
//! These drive the registry with random sequences of reservations, blocks
//! and in-block handouts and then check the ledger-wide invariants.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use super::Registry;
use crate::booking::Booking;
use crate::room::Room;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[derive(Debug, Clone)]
enum Operation {
    Reserve { offset: i64, nights: i64 },
    Block { offset: i64, nights: i64, rooms: usize },
    HandOut { block: usize, count: usize },
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0i64..30, 0i64..10).prop_map(|(offset, nights)| Operation::Reserve { offset, nights }),
        (0i64..30, 0i64..10, 0usize..=6).prop_map(|(offset, nights, rooms)| Operation::Block {
            offset,
            nights,
            rooms
        }),
        (0usize..8, 0usize..=4).prop_map(|(block, count)| Operation::HandOut { block, count }),
    ]
}

fn apply(registry: &mut Registry, index: usize, operation: &Operation) {
    let day = |offset: i64| base_date() + Duration::days(offset);
    match *operation {
        Operation::Reserve { offset, nights } => {
            let _ = registry.create_reservation(
                &format!("guest-{index}"),
                day(offset),
                day(offset + nights),
            );
        }
        Operation::Block {
            offset,
            nights,
            rooms,
        } => {
            let _ = registry.reserve_block(
                &format!("group-{index}"),
                day(offset),
                day(offset + nights),
                rooms,
            );
        }
        Operation::HandOut { block, count } => {
            let name = registry
                .blocks()
                .nth(block)
                .map(|b| b.group_name().to_string());
            if let Some(name) = name {
                let _ = registry.reserve_room_in_block(&name, count);
            }
        }
    }
}

fn build(operations: &[Operation], room_count: u16) -> Registry {
    let mut registry = Registry::with_room_count(room_count).unwrap();
    for (index, operation) in operations.iter().enumerate() {
        apply(&mut registry, index, operation);
    }
    registry
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // No two bookings holding the same room ever overlap in time
    #[test]
    fn no_double_booking(
        operations in prop::collection::vec(operation_strategy(), 1..60),
        room_count in 1u16..=20,
    ) {
        let registry = build(&operations, room_count);
        let bookings = registry.all_bookings();

        for (i, first) in bookings.iter().enumerate() {
            for second in &bookings[i + 1..] {
                if first.range().overlaps(second.range()) {
                    let first_rooms: BTreeSet<Room> = first.rooms().collect();
                    let shared = second.rooms().any(|room| first_rooms.contains(&room));
                    prop_assert!(!shared, "{} and {} share a room", first.name(), second.name());
                }
            }
        }
    }

    // Availability is the inventory minus rooms held by overlapping bookings
    #[test]
    fn availability_is_complement_of_occupied(
        operations in prop::collection::vec(operation_strategy(), 0..40),
        offset in 0i64..30,
        nights in 0i64..10,
    ) {
        let registry = build(&operations, 20);
        let check_in = base_date() + Duration::days(offset);
        let check_out = check_in + Duration::days(nights);

        let available = registry.available_rooms_for(check_in, check_out).unwrap();
        let held: BTreeSet<Room> = registry
            .all_bookings()
            .iter()
            .filter(|b| b.range().check_in < check_out && check_in < b.range().check_out)
            .flat_map(|booking: &Booking| booking.rooms())
            .collect();

        for room in registry.rooms().iter() {
            prop_assert_eq!(available.contains(&room), !held.contains(&room));
        }
    }

    // Every block keeps available rooms inside its reserved rooms
    #[test]
    fn block_availability_subset_of_reserved(
        operations in prop::collection::vec(operation_strategy(), 1..60),
    ) {
        let registry = build(&operations, 20);
        for block in registry.blocks() {
            prop_assert!(block.available_rooms().is_subset(block.reserved_rooms()));
            prop_assert!(!block.reserved_rooms().is_empty());
            prop_assert!(block.reserved_rooms().len() <= registry.max_block_size());
            prop_assert_eq!(
                block.available_rooms().len() + block.sub_bookings().len(),
                block.reserved_rooms().len()
            );
        }
    }

    // Handing out a block's full capacity leaves it fully booked
    #[test]
    fn handing_out_capacity_depletes_block(
        size in 1usize..=5,
        split in prop::collection::vec(1usize..=5, 1..6),
    ) {
        let mut registry = Registry::default();
        let start = base_date();
        registry.reserve_block("Group", start, start + Duration::days(2), size).unwrap();

        let mut remaining = size;
        for chunk in split {
            if remaining == 0 {
                break;
            }
            let count = chunk.min(remaining);
            registry.reserve_room_in_block("Group", count).unwrap();
            remaining -= count;
        }
        if remaining > 0 {
            registry.reserve_room_in_block("Group", remaining).unwrap();
        }

        let depleted = matches!(
            registry.available_rooms_in_block("Group"),
            Err(crate::Error::BlockFullyBooked { .. })
        );
        prop_assert!(depleted, "block still reports free rooms");
        let refused = matches!(
            registry.reserve_room_in_block("Group", 1),
            Err(crate::Error::BlockFullyBooked { .. })
        );
        prop_assert!(refused, "depleted block handed out another room");
    }

    // Failed operations never change the ledger
    #[test]
    fn failures_leave_ledger_untouched(
        operations in prop::collection::vec(operation_strategy(), 0..30),
        next in operation_strategy(),
    ) {
        let mut registry = build(&operations, 5);
        let before = registry.all_bookings().to_vec();

        let result = match next {
            Operation::Reserve { offset, nights } => {
                let day = base_date() + Duration::days(offset);
                registry
                    .create_reservation("probe", day, day + Duration::days(nights))
                    .map(|_| ())
            }
            Operation::Block { offset, nights, rooms } => {
                let day = base_date() + Duration::days(offset);
                registry
                    .reserve_block("probe", day, day + Duration::days(nights), rooms)
                    .map(|_| ())
            }
            Operation::HandOut { count, .. } => {
                registry.reserve_room_in_block("missing", count).map(|_| ())
            }
        };

        if result.is_err() {
            prop_assert_eq!(registry.all_bookings(), before.as_slice());
        }
    }
}
