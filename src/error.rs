//! Errors raised by the booking manager.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Result alias for booking manager operations.
pub type BookingResult<T> = Result<T, BookingError>;

/// Booking manager failure.
///
/// The date variants are argument errors detected before any allocation
/// happens. "No room available" is not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// Requested start date is today or earlier.
    #[error("start date must be in the future")]
    StartDateNotInFuture,
    /// Requested range ends before it starts.
    #[error("The start date cannot be later than the end date.")]
    StartDateAfterEndDate,
    /// A repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BookingError {
    /// Whether this error rejects a caller-supplied argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::StartDateNotInFuture | Self::StartDateAfterEndDate)
    }
}
