//! Room model.
//!
//! Rooms host scheduled sessions. The lab flag is the allocation
//! discriminator: lab subjects must land in lab rooms, and lab rooms
//! never host non-lab sessions.

use serde::{Deserialize, Serialize};

/// Room classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Classroom,
    Laboratory,
    Auditorium,
    SeminarHall,
}

impl RoomType {
    /// Whether rooms of this type are labs by default.
    pub fn is_lab(&self) -> bool {
        matches!(self, RoomType::Laboratory)
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            RoomType::Classroom => "Classroom",
            RoomType::Laboratory => "Laboratory",
            RoomType::Auditorium => "Auditorium",
            RoomType::SeminarHall => "Seminar Hall",
        }
    }
}

/// A room available for allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Room classification.
    pub room_type: RoomType,
    /// Whether this room counts as a lab for allocation purposes.
    /// Defaults from `room_type` but can be overridden (e.g. a seminar
    /// hall fitted with workstations).
    pub is_lab: bool,
    /// Seating capacity.
    pub capacity: i32,
}

impl Room {
    /// Creates a room; the lab flag defaults from the type.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            room_type,
            is_lab: room_type.is_lab(),
            capacity: 60,
        }
    }

    /// Creates a classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Classroom)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Laboratory)
    }

    /// Creates an auditorium.
    pub fn auditorium(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Auditorium)
    }

    /// Creates a seminar hall.
    pub fn seminar_hall(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::SeminarHall)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Overrides the lab flag.
    pub fn with_is_lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }
}
