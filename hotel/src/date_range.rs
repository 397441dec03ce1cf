//! Half-open date ranges and the overlap engine.
//!
//! A stay covers the nights from `check_in` up to, but not including,
//! `check_out`. Two stays conflict only when they share at least one night,
//! so a guest may check in on the day another checks out of the same room.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::Booking;
use crate::error::{Error, Result};
use crate::room::Room;

/// Format accepted by [`parse_date`] and [`DateRange::parse`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A half-open interval of calendar dates, `[check_in, check_out)`.
///
/// Construction does not check ordering; call [`DateRange::validate`] (or
/// use [`DateRange::validated`]) before relying on the range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hotel::DateRange;
///
/// let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
/// let first = DateRange::new(jan(1), jan(5));
/// let second = DateRange::new(jan(5), jan(10));
///
/// assert!(first.contains(jan(4)));
/// assert!(!first.contains(jan(5)));
/// assert!(!first.overlaps(&second));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First night of the stay (inclusive).
    pub check_in: NaiveDate,
    /// Departure day (exclusive).
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Creates a range without validating it.
    #[must_use]
    pub const fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Creates a range and validates it in one step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if `check_in` is after `check_out`.
    pub fn validated(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self> {
        let range = Self::new(check_in, check_out);
        range.validate()?;
        Ok(range)
    }

    /// Parses a range from two `YYYY-MM-DD` strings and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if either string is not a date, or
    /// [`Error::InvalidDateRange`] if the dates are out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use hotel::DateRange;
    ///
    /// let range = DateRange::parse("2024-02-01", "2024-02-03").unwrap();
    /// assert_eq!(range.nights(), 2);
    ///
    /// assert!(DateRange::parse("2024-02-03", "2024-02-01").is_err());
    /// assert!(DateRange::parse("February", "2024-02-01").is_err());
    /// ```
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self> {
        Self::validated(parse_date(check_in)?, parse_date(check_out)?)
    }

    /// Checks that `check_in` does not fall after `check_out`.
    ///
    /// A zero-night range (`check_in == check_out`) is valid; it contains
    /// no dates and overlaps nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDateRange`] if the dates are out of order.
    pub fn validate(&self) -> Result<()> {
        if self.check_in > self.check_out {
            return Err(Error::InvalidDateRange {
                check_in: self.check_in,
                check_out: self.check_out,
            });
        }
        Ok(())
    }

    /// Returns `true` if `date` is a night of this stay.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Returns `true` if the two stays share at least one night.
    ///
    /// Back-to-back stays do not conflict, and a zero-night range
    /// overlaps nothing.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in.max(other.check_in) < self.check_out.min(other.check_out)
    }

    /// Number of nights covered; zero for an empty or inverted range.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }

    /// Collects every room held by a booking that overlaps this range.
    ///
    /// Blocks contribute all of their reserved rooms regardless of how many
    /// have been handed out, since the whole allocation is withheld from the
    /// public for the block's dates.
    pub fn occupied_rooms<'a>(
        &self,
        bookings: impl IntoIterator<Item = &'a Booking>,
    ) -> BTreeSet<Room> {
        bookings
            .into_iter()
            .filter(|booking| self.overlaps(booking.range()))
            .flat_map(|booking| booking.rooms())
            .collect()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.check_in, self.check_out)
    }
}

/// Parses a single `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the input is not a calendar date in
/// that format.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| Error::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod proptests;
