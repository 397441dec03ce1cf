//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, RoomConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn room_config_strategy() -> impl Strategy<Value = RoomConfig> {
    prop_oneof![
        (1u16..=500).prop_map(|count| RoomConfig {
            count: Some(count),
            ids: None,
        }),
        prop::collection::btree_set(1u16..=999, 1..30).prop_map(|ids| RoomConfig {
            count: None,
            ids: Some(ids.into_iter().collect()),
        }),
    ]
}

fn log_level_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["quiet", "normal", "verbose", "QUIET", "Verbose"])
        .prop_map(str::to_string)
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(room_config_strategy()),
        prop::option::of(1u8..=u8::MAX),
        prop::option::of(log_level_strategy()),
    )
        .prop_map(|(rooms, max_block_size, log_level)| Config {
            rooms,
            max_block_size,
            log_level,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins field by field when set
    #[test]
    fn merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.rooms, high.rooms.or(low.rooms));
        prop_assert_eq!(result.max_block_size, high.max_block_size.or(low.max_block_size));
        prop_assert_eq!(result.log_level, high.log_level.or(low.log_level));
    }

    // Merging two valid layers never produces an invalid config
    #[test]
    fn merge_preserves_validity(low in config_strategy(), high in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&low).is_ok());
        prop_assert!(ConfigValidator::validate(&high).is_ok());

        let mut result = low;
        ConfigMerger::merge_into(&mut result, &high);
        prop_assert!(ConfigValidator::validate(&result).is_ok());
    }

    // Merging is idempotent
    #[test]
    fn merge_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base.clone();
        ConfigMerger::merge_into(&mut once, &layer);

        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);

        prop_assert_eq!(once, twice);
    }

    // Valid room configs always build an inventory of the expected size
    #[test]
    fn valid_rooms_build_inventory(rooms in room_config_strategy()) {
        let inventory = rooms.inventory().unwrap();
        let expected = match (&rooms.count, &rooms.ids) {
            (Some(count), None) => usize::from(*count),
            (None, Some(ids)) => ids.len(),
            _ => unreachable!(),
        };
        prop_assert_eq!(inventory.len(), expected);
    }
}
