//! Booking manager and occupancy evaluation.
//!
//! # Algorithm
//!
//! `BookingManager` allocates rooms first-fit in store order: the first
//! room with no overlapping booking wins. It is not best-fit and keeps no
//! state between calls.
//!
//! # Occupancy
//!
//! `OccupancyPolicy` decides which bookings occupy and how a fully booked
//! day is counted. `OccupancySummary` reports per-room occupied days and
//! the overall occupancy rate.

mod booking_manager;
mod clock;
mod occupancy;
mod summary;

pub use booking_manager::{BookingManager, NO_ROOM_AVAILABLE};
pub use clock::{Clock, FixedClock, SystemClock};
pub use occupancy::OccupancyPolicy;
pub use summary::OccupancySummary;
