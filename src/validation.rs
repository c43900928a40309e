//! Integrity checks for booking and room snapshots.
//!
//! The booking manager tolerates inconsistent data (dangling room ids,
//! inverted ranges, double-booked rooms). These checks let a caller find
//! such problems before or after loading a store. Detects:
//! - Duplicate IDs
//! - Bookings whose start date lies after their end date
//! - Bookings referencing rooms that don't exist
//! - Overlapping bookings on the same room

use std::collections::{HashMap, HashSet};

use crate::models::{Booking, Room, RoomId};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A booking starts after it ends.
    InvertedDateRange,
    /// A booking references a room that doesn't exist.
    UnknownRoomReference,
    /// Two bookings hold the same room on a common day.
    DoubleBookedRoom,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a booking and room snapshot.
///
/// Checks:
/// 1. No duplicate room IDs
/// 2. No duplicate booking IDs
/// 3. Every booking has `start_date <= end_date`
/// 4. Every assigned room ID points to an existing room
/// 5. No two bookings overlap on the same room
///
/// Activity flags are ignored: an inactive booking still counts.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(bookings: &[Booking], rooms: &[Room]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut booking_ids = HashSet::new();
    for b in bookings {
        if !booking_ids.insert(b.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate booking ID: {}", b.id),
            ));
        }

        if b.period().is_inverted() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedDateRange,
                format!(
                    "Booking {} starts on {} after it ends on {}",
                    b.id, b.start_date, b.end_date
                ),
            ));
        }

        if let Some(room_id) = b.room_id {
            if !room_ids.contains(&room_id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoomReference,
                    format!("Booking {} references unknown room {}", b.id, room_id),
                ));
            }
        }
    }

    errors.extend(detect_double_bookings(bookings));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Finds overlapping booking pairs per room.
///
/// # Algorithm
/// Group by room, sort each group by start date, then sweep while
/// tracking the booking with the latest end seen so far. Any booking
/// starting on or before that end overlaps it.
fn detect_double_bookings(bookings: &[Booking]) -> Vec<ValidationError> {
    let mut by_room: HashMap<RoomId, Vec<&Booking>> = HashMap::new();
    for b in bookings.iter().filter(|b| !b.period().is_inverted()) {
        if let Some(room_id) = b.room_id {
            by_room.entry(room_id).or_default().push(b);
        }
    }

    let mut groups: Vec<_> = by_room.into_iter().collect();
    groups.sort_unstable_by_key(|(room_id, _)| *room_id);

    let mut errors = Vec::new();
    for (room_id, mut group) in groups {
        group.sort_by_key(|b| (b.start_date, b.id));

        let mut latest: Option<&Booking> = None;
        for b in group {
            if let Some(prev) = latest {
                if b.start_date <= prev.end_date {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DoubleBookedRoom,
                        format!(
                            "Bookings {} and {} overlap on room {}",
                            prev.id, b.id, room_id
                        ),
                    ));
                }
                if b.end_date > prev.end_date {
                    latest = Some(b);
                }
            } else {
                latest = Some(b);
            }
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_rooms() -> Vec<Room> {
        vec![
            Room::new(1).with_description("Single"),
            Room::new(2).with_description("Double"),
        ]
    }

    fn sample_bookings() -> Vec<Booking> {
        vec![
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5)).with_room(1),
            Booking::new(2, 2, date(2030, 1, 6), date(2030, 1, 9)).with_room(1),
            Booking::new(3, 3, date(2030, 1, 1), date(2030, 1, 9)).with_room(2),
            Booking::new(4, 4, date(2030, 2, 1), date(2030, 2, 2)), // unassigned
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_bookings(), &sample_rooms()).is_ok());
    }

    #[test]
    fn test_duplicate_room_id() {
        let rooms = vec![Room::new(1), Room::new(1), Room::new(2)];

        let errors = validate_input(&sample_bookings(), &rooms).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_duplicate_booking_id() {
        let bookings = vec![
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 2)).with_room(1),
            Booking::new(1, 2, date(2030, 1, 1), date(2030, 1, 2)).with_room(2),
        ];

        let errors = validate_input(&bookings, &sample_rooms()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("booking"));
    }

    #[test]
    fn test_inverted_range() {
        let bookings = vec![Booking::new(1, 1, date(2030, 1, 9), date(2030, 1, 2)).with_room(1)];

        let errors = validate_input(&bookings, &sample_rooms()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvertedDateRange));
    }

    #[test]
    fn test_unknown_room_reference() {
        let bookings = vec![Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 2)).with_room(99)];

        let errors = validate_input(&bookings, &sample_rooms()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownRoomReference));
    }

    #[test]
    fn test_double_booked_touching_days() {
        // Second booking starts the day the first ends
        let bookings = vec![
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5)).with_room(1),
            Booking::new(2, 2, date(2030, 1, 5), date(2030, 1, 8)).with_room(1),
        ];

        let errors = validate_input(&bookings, &sample_rooms()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DoubleBookedRoom);
        assert_eq!(errors[0].message, "Bookings 1 and 2 overlap on room 1");
    }

    #[test]
    fn test_double_booked_nested() {
        // 3 sits inside 1 even though 2 ends earlier
        let bookings = vec![
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 20)).with_room(2),
            Booking::new(2, 2, date(2030, 1, 2), date(2030, 1, 3)).with_room(2),
            Booking::new(3, 3, date(2030, 1, 10), date(2030, 1, 11)).with_room(2),
        ];

        let errors = validate_input(&bookings, &sample_rooms()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DoubleBookedRoom));
    }

    #[test]
    fn test_inactive_still_counts() {
        let bookings = vec![
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 5)).with_room(1).inactive(),
            Booking::new(2, 2, date(2030, 1, 3), date(2030, 1, 4)).with_room(1),
        ];

        assert!(validate_input(&bookings, &sample_rooms()).is_err());
    }

    #[test]
    fn test_multiple_errors() {
        let bookings = vec![
            Booking::new(1, 1, date(2030, 1, 9), date(2030, 1, 2)).with_room(7),
            Booking::new(1, 1, date(2030, 1, 1), date(2030, 1, 2)),
        ];
        let rooms = vec![];

        let errors = validate_input(&bookings, &rooms).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
