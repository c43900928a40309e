//! Room model.
//!
//! Rooms carry no dates of their own. Whether a room is taken on a given
//! day is derived from the bookings that reference its identifier.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Room {
    /// Creates a room with an empty description.
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            description: String::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
