//! Booking model.
//!
//! A booking is a customer's claim on one room over an inclusive range of
//! days. Bookings are created by the caller; the booking manager only
//! fills in the room it allocated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookingId, CustomerId, DateRange, RoomId};

/// A room booking.
///
/// # Date Representation
/// Start and end are calendar days, both inclusive. Accepted bookings
/// satisfy `start_date <= end_date`; nothing in this crate enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Booking identifier, assigned by the caller.
    pub id: BookingId,
    /// Opaque customer identifier.
    pub customer_id: CustomerId,
    /// Assigned room. `None` = not yet allocated.
    #[serde(default)]
    pub room_id: Option<RoomId>,
    /// Whether the booking is live (e.g. not cancelled).
    pub is_active: bool,
    /// First night (inclusive).
    pub start_date: NaiveDate,
    /// Last day (inclusive).
    pub end_date: NaiveDate,
}

impl Booking {
    /// Creates an active, unassigned booking.
    pub fn new(
        id: BookingId,
        customer_id: CustomerId,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            customer_id,
            room_id: None,
            is_active: true,
            start_date,
            end_date,
        }
    }

    /// Sets the room.
    pub fn with_room(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    /// Marks the booking inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// The days this booking covers.
    #[inline]
    pub fn period(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Whether this booking holds `date`.
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.period().contains(date)
    }

    /// Whether this booking is for `room_id`.
    #[inline]
    pub fn is_for_room(&self, room_id: RoomId) -> bool {
        self.room_id == Some(room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_booking_builder() {
        let b = Booking::new(10, 1, date(2030, 1, 1), date(2030, 1, 5)).with_room(22);

        assert_eq!(b.id, 10);
        assert_eq!(b.customer_id, 1);
        assert_eq!(b.room_id, Some(22));
        assert!(b.is_active);
        assert!(b.is_for_room(22));
        assert!(!b.is_for_room(1));
    }

    #[test]
    fn test_unassigned_matches_no_room() {
        let b = Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5));
        assert_eq!(b.room_id, None);
        assert!(!b.is_for_room(0));
        assert!(!b.is_for_room(1));
    }

    #[test]
    fn test_covers() {
        let b = Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5));
        assert!(b.covers(date(2030, 1, 1)));
        assert!(b.covers(date(2030, 1, 5)));
        assert!(!b.covers(date(2030, 1, 6)));
    }

    #[test]
    fn test_inactive() {
        let b = Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5)).inactive();
        assert!(!b.is_active);
    }

    #[test]
    fn test_deserialize_without_room() {
        let json = r#"{
            "id": 7,
            "customer_id": 3,
            "is_active": true,
            "start_date": "2030-06-01",
            "end_date": "2030-06-03"
        }"#;
        let b: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(b, Booking::new(7, 3, date(2030, 6, 1), date(2030, 6, 3)));
    }
}
