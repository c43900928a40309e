//! Room-availability engine for hotel bookings.
//!
//! Decides whether a requested date range can be satisfied, which room to
//! assign, and which calendar days are fully booked across all rooms.
//! Persistence and any HTTP/CLI surface live outside this crate, behind
//! the [`repository::Repository`] capability.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Booking`, `Room`, `DateRange`
//! - **`repository`**: Store contract and an in-memory implementation
//! - **`manager`**: `BookingManager` (allocation, occupancy queries),
//!   `OccupancyPolicy`, `OccupancySummary`, `Clock`
//! - **`validation`**: Snapshot integrity checks (duplicate IDs, dangling
//!   room refs, double bookings)
//!
//! # Concurrency
//!
//! Everything is synchronous. The manager re-reads its repositories on
//! every call and does not lock across the read and the add that make up
//! a booking; concurrent booking requests must be serialized by the caller.

pub mod error;
pub mod manager;
pub mod models;
pub mod repository;
pub mod validation;

pub use error::{BookingError, BookingResult};
