//! Occupancy rules shared by allocation and calendar queries.
//!
//! # Counting
//!
//! | Policy flag | Default | Effect when flipped |
//! |-------------|---------|---------------------|
//! | `include_inactive` | `true` | Inactive bookings stop occupying rooms |
//! | `count_distinct_rooms` | `false` | A day is full when every room id is covered |
//!
//! The defaults reproduce the historical behaviour of the booking
//! service: every stored booking occupies, and a day is full when the
//! number of covering bookings equals the number of rooms.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Booking, DateRange, Room, RoomId};

/// How bookings are counted against rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyPolicy {
    /// Count inactive (e.g. cancelled) bookings as occupying.
    pub include_inactive: bool,
    /// Count distinct covered rooms per day instead of covering bookings.
    pub count_distinct_rooms: bool,
}

impl Default for OccupancyPolicy {
    fn default() -> Self {
        Self::faithful()
    }
}

impl OccupancyPolicy {
    /// Historical counting: all bookings occupy, raw overlap counts.
    pub const fn faithful() -> Self {
        Self {
            include_inactive: true,
            count_distinct_rooms: false,
        }
    }

    /// Ignores inactive bookings and counts distinct rooms.
    pub const fn strict() -> Self {
        Self {
            include_inactive: false,
            count_distinct_rooms: true,
        }
    }

    /// Sets whether inactive bookings occupy.
    pub fn with_include_inactive(mut self, include_inactive: bool) -> Self {
        self.include_inactive = include_inactive;
        self
    }

    /// Sets whether full days are judged by distinct rooms.
    pub fn with_count_distinct_rooms(mut self, count_distinct_rooms: bool) -> Self {
        self.count_distinct_rooms = count_distinct_rooms;
        self
    }

    /// Whether `booking` takes up its room under this policy.
    #[inline]
    pub fn occupies(&self, booking: &Booking) -> bool {
        self.include_inactive || booking.is_active
    }

    /// Bookings that occupy under this policy.
    pub fn occupying<'a>(&self, bookings: &'a [Booking]) -> impl Iterator<Item = &'a Booking> {
        let policy = *self;
        bookings.iter().filter(move |b| policy.occupies(b))
    }

    /// Whether any occupying booking for `room_id` shares a day with `requested`.
    pub fn has_conflict(
        &self,
        room_id: RoomId,
        requested: &DateRange,
        bookings: &[Booking],
    ) -> bool {
        self.occupying(bookings)
            .any(|b| b.is_for_room(room_id) && b.period().overlaps(requested))
    }

    /// Days of `range` on which every room is taken, in ascending order.
    ///
    /// With raw counting and no rooms, every day qualifies (0 bookings = 0 rooms).
    pub fn fully_occupied_dates(
        &self,
        range: &DateRange,
        bookings: &[Booking],
        rooms: &[Room],
    ) -> Vec<NaiveDate> {
        let relevant: Vec<&Booking> = self
            .occupying(bookings)
            .filter(|b| b.period().overlaps(range))
            .collect();

        if self.count_distinct_rooms {
            let room_ids: HashSet<RoomId> = rooms.iter().map(|r| r.id).collect();
            range
                .days()
                .filter(|&day| {
                    let covered: HashSet<RoomId> = relevant
                        .iter()
                        .filter(|b| b.covers(day))
                        .filter_map(|b| b.room_id)
                        .filter(|id| room_ids.contains(id))
                        .collect();
                    covered.len() == room_ids.len()
                })
                .collect()
        } else {
            let room_count = rooms.len();
            range
                .days()
                .filter(|&day| relevant.iter().filter(|b| b.covers(day)).count() == room_count)
                .collect()
        }
    }
}
