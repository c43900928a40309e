//! First-fit room allocation over repository snapshots.
//!
//! # Algorithm
//!
//! 1. Reject a start date that is not strictly after today.
//! 2. Load every room and every booking.
//! 3. Walk the rooms in store order; the first room with no occupying
//!    booking overlapping the requested range (inclusive) wins.
//!
//! # Complexity
//! O(r * b) per allocation and O(d * b) per occupancy query, where
//! r = rooms, b = bookings, d = days in the queried range.

use chrono::NaiveDate;
use tracing::{debug, trace};

use super::{Clock, OccupancyPolicy, OccupancySummary, SystemClock};
use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, DateRange, Room, RoomId};
use crate::repository::Repository;

/// Room id reported by [`BookingManager::find_available_room_id`] when
/// nothing is free.
pub const NO_ROOM_AVAILABLE: RoomId = -1;

/// Allocates rooms and reports fully booked days.
///
/// Stateless: every call re-reads both repositories. A read followed by
/// an add in [`create_booking`](Self::create_booking) is not atomic;
/// callers that accept concurrent requests must serialize them.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use hotel_booking::manager::{BookingManager, FixedClock};
/// use hotel_booking::models::{Booking, Room};
/// use hotel_booking::repository::InMemoryRepository;
///
/// let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// let rooms = InMemoryRepository::from(vec![Room::new(1), Room::new(2)]);
/// let bookings: InMemoryRepository<Booking> = InMemoryRepository::new();
/// let manager = BookingManager::new(&bookings, &rooms).with_clock(FixedClock(today));
///
/// let start = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap();
/// let end = NaiveDate::from_ymd_opt(2030, 1, 12).unwrap();
/// let mut booking = Booking::new(1, 42, start, end);
///
/// assert!(manager.create_booking(&mut booking).unwrap());
/// assert_eq!(booking.room_id, Some(1));
/// assert_eq!(manager.find_available_room(start, end).unwrap(), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct BookingManager<B, R, C = SystemClock> {
    bookings: B,
    rooms: R,
    clock: C,
    policy: OccupancyPolicy,
}

impl<B, R> BookingManager<B, R, SystemClock>
where
    B: Repository<Booking>,
    R: Repository<Room>,
{
    /// Creates a manager using the local system date and faithful counting.
    pub fn new(bookings: B, rooms: R) -> Self {
        Self {
            bookings,
            rooms,
            clock: SystemClock,
            policy: OccupancyPolicy::default(),
        }
    }
}

impl<B, R, C> BookingManager<B, R, C>
where
    B: Repository<Booking>,
    R: Repository<Room>,
    C: Clock,
{
    /// Replaces the clock that decides what "today" is.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> BookingManager<B, R, C2> {
        BookingManager {
            bookings: self.bookings,
            rooms: self.rooms,
            clock,
            policy: self.policy,
        }
    }

    /// Sets the occupancy policy.
    pub fn with_policy(mut self, policy: OccupancyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The booking store.
    pub fn booking_repository(&self) -> &B {
        &self.bookings
    }

    /// Finds the first room free on every day of `[start_date, end_date]`.
    ///
    /// Only `start_date` is checked against today; `end_date` is taken as
    /// given. Returns `None` when every room has a conflicting booking.
    pub fn find_available_room(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<Option<RoomId>> {
        let today = self.clock.today();
        if start_date <= today {
            debug!(%start_date, %today, "rejecting start date not in the future");
            return Err(BookingError::StartDateNotInFuture);
        }

        let requested = DateRange::new(start_date, end_date);
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        for room in &rooms {
            if self.policy.has_conflict(room.id, &requested, &bookings) {
                trace!(room_id = room.id, "room has a conflicting booking");
                continue;
            }
            debug!(room_id = room.id, %start_date, %end_date, "found available room");
            return Ok(Some(room.id));
        }

        debug!(
            %start_date,
            %end_date,
            rooms = rooms.len(),
            "no room available"
        );
        Ok(None)
    }

    /// Like [`find_available_room`](Self::find_available_room), with
    /// [`NO_ROOM_AVAILABLE`] standing in for `None`.
    pub fn find_available_room_id(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<RoomId> {
        Ok(self
            .find_available_room(start_date, end_date)?
            .unwrap_or(NO_ROOM_AVAILABLE))
    }

    /// Allocates a room for `booking` and stores it.
    ///
    /// On success the booking's room is overwritten with the allocated one,
    /// the booking is added to the booking store exactly once, and `true`
    /// is returned. When no room is free, or the store rejects the add,
    /// the booking is left untouched.
    pub fn create_booking(&self, booking: &mut Booking) -> BookingResult<bool> {
        let Some(room_id) = self.find_available_room(booking.start_date, booking.end_date)? else {
            debug!(booking_id = booking.id, "booking rejected, no room available");
            return Ok(false);
        };

        let stored = Booking {
            room_id: Some(room_id),
            ..booking.clone()
        };
        self.bookings.add(stored)?;
        booking.room_id = Some(room_id);
        debug!(booking_id = booking.id, room_id, "booking created");
        Ok(true)
    }

    /// Allocates and stores `booking`, returning it with its room assigned.
    pub fn create_booking_assigned(&self, mut booking: Booking) -> BookingResult<Option<Booking>> {
        Ok(self.create_booking(&mut booking)?.then_some(booking))
    }

    /// Days in `[start_date, end_date]` on which every room is taken.
    ///
    /// Ascending, without duplicates. Under the default policy a day is
    /// full when the number of covering bookings equals the room count.
    pub fn get_fully_occupied_dates(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<Vec<NaiveDate>> {
        let range = Self::checked_range(start_date, end_date)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        let dates = self.policy.fully_occupied_dates(&range, &bookings, &rooms);
        debug!(
            %start_date,
            %end_date,
            fully_occupied = dates.len(),
            "computed fully occupied dates"
        );
        Ok(dates)
    }

    /// Occupancy metrics for `[start_date, end_date]`.
    pub fn occupancy_summary(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> BookingResult<OccupancySummary> {
        let range = Self::checked_range(start_date, end_date)?;
        let rooms = self.rooms.get_all()?;
        let bookings = self.bookings.get_all()?;

        Ok(OccupancySummary::calculate(
            range,
            &bookings,
            &rooms,
            &self.policy,
        ))
    }

    fn checked_range(start_date: NaiveDate, end_date: NaiveDate) -> BookingResult<DateRange> {
        let range = DateRange::new(start_date, end_date);
        if range.is_inverted() {
            debug!(%start_date, %end_date, "rejecting inverted date range");
            return Err(BookingError::StartDateAfterEndDate);
        }
        Ok(range)
    }
}
