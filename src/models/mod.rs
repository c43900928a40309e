//! Booking domain models.
//!
//! Provides the data types the availability engine reasons about.
//! Entities are plain values: the engine reads them from repositories
//! and never mutates stored instances.
//!
//! # Identifiers
//!
//! | Alias | Meaning |
//! |-------|---------|
//! | `BookingId` | Caller-assigned booking key |
//! | `CustomerId` | Opaque customer reference |
//! | `RoomId` | Room key; bookings reference rooms by it |

mod booking;
mod date_range;
mod room;

pub use booking::Booking;
pub use date_range::{DateRange, Days};
pub use room::Room;

/// Booking identifier.
pub type BookingId = i32;
/// Customer identifier.
pub type CustomerId = i32;
/// Room identifier.
pub type RoomId = i32;
