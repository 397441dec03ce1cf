//! Property-based tests for `DateRange` overlap semantics.

use super::DateRange;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

// Strategy for generating valid ranges within a two-month window
fn range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..60, 0i64..15).prop_map(|(offset, nights)| {
        let check_in = base_date() + Duration::days(offset);
        DateRange::new(check_in, check_in + Duration::days(nights))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Overlap is symmetric
    #[test]
    fn overlap_is_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // Two ranges overlap exactly when some date lies in both
    #[test]
    fn overlap_matches_shared_night(a in range_strategy(), b in range_strategy()) {
        let shared = (0..80)
            .map(|offset| base_date() + Duration::days(offset))
            .any(|day| a.contains(day) && b.contains(day));
        prop_assert_eq!(a.overlaps(&b), shared);
    }

    // A stay starting on another's check-out day never conflicts with it
    #[test]
    fn back_to_back_never_overlaps(a in range_strategy(), nights in 0i64..15) {
        let next = DateRange::new(a.check_out, a.check_out + Duration::days(nights));
        prop_assert!(!a.overlaps(&next));
    }

    // Validation fails exactly when the dates are inverted
    #[test]
    fn validate_matches_ordering(offset_in in 0i64..60, offset_out in 0i64..60) {
        let range = DateRange::new(
            base_date() + Duration::days(offset_in),
            base_date() + Duration::days(offset_out),
        );
        prop_assert_eq!(range.validate().is_ok(), offset_in <= offset_out);
    }

    // Nights equals the number of contained dates
    #[test]
    fn nights_counts_contained_dates(range in range_strategy()) {
        let contained = (0..80)
            .map(|offset| base_date() + Duration::days(offset))
            .filter(|day| range.contains(*day))
            .count();
        prop_assert_eq!(usize::try_from(range.nights()).unwrap(), contained);
    }
}
