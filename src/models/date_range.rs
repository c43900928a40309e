//! Inclusive calendar date ranges.
//!
//! # Date Model
//! All dates are `chrono::NaiveDate`: no time zone and no time of day.
//! A range `[start, end]` includes both endpoints, so a booking that ends
//! on the day another one starts still shares that day with it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date interval [start, end].
///
/// Closed interval: includes both start and end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range. Inverted ranges are representable.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Whether `start` lies after `end`.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// Number of calendar days covered (0 for an inverted range).
    pub fn num_days(&self) -> i64 {
        if self.is_inverted() {
            return 0;
        }
        self.end.signed_duration_since(self.start).num_days() + 1
    }

    /// Whether a date falls within this range.
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> Days {
        Days {
            next: (!self.is_inverted()).then_some(self.start),
            end: self.end,
        }
    }
}

/// Day-by-day iterator over a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }
}
