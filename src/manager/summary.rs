//! Occupancy metrics over a date range.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total days | Days in the inclusive range |
//! | Fully occupied dates | Days on which every room is taken |
//! | Occupied days by room | Days a room has at least one occupying booking |
//! | Occupancy rate | Occupied room-days / (rooms × days) |

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::OccupancyPolicy;
use crate::models::{Booking, DateRange, Room, RoomId};

/// Occupancy indicators for one range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// The evaluated range.
    pub range: DateRange,
    /// Days in the range.
    pub total_days: i64,
    /// Number of rooms in the store, duplicates included.
    pub room_count: usize,
    /// Fully occupied days, ascending.
    pub fully_occupied_dates: Vec<NaiveDate>,
    /// Per-room count of occupied days.
    pub occupied_days_by_room: HashMap<RoomId, i64>,
    /// Fraction of room-days occupied (0.0..1.0), over distinct room ids.
    pub occupancy_rate: f64,
}

impl OccupancySummary {
    /// Computes occupancy for `range` from a booking and room snapshot.
    pub fn calculate(
        range: DateRange,
        bookings: &[Booking],
        rooms: &[Room],
        policy: &OccupancyPolicy,
    ) -> Self {
        let total_days = range.num_days();
        let fully_occupied_dates = policy.fully_occupied_dates(&range, bookings, rooms);

        let mut occupied_days_by_room = HashMap::new();
        for room in rooms {
            let occupied = range
                .days()
                .filter(|&day| {
                    policy
                        .occupying(bookings)
                        .any(|b| b.is_for_room(room.id) && b.covers(day))
                })
                .count() as i64;
            occupied_days_by_room.insert(room.id, occupied);
        }

        let capacity = occupied_days_by_room.len() as i64 * total_days;
        let occupancy_rate = if capacity == 0 {
            0.0
        } else {
            let occupied: i64 = occupied_days_by_room.values().sum();
            occupied as f64 / capacity as f64
        };

        Self {
            range,
            total_days,
            room_count: rooms.len(),
            fully_occupied_dates,
            occupied_days_by_room,
            occupancy_rate,
        }
    }

    /// Whether every day of the range is fully occupied.
    pub fn is_fully_booked(&self) -> bool {
        self.fully_occupied_dates.len() as i64 == self.total_days
    }

    /// Days with at least one free room.
    pub fn available_days(&self) -> i64 {
        self.total_days - self.fully_occupied_dates.len() as i64
    }
}
