//! Instructor model.
//!
//! Instructors are referenced by ID from subjects and schedule entries.
//! The engine never mutates instructor records; `max_hours_per_week` is
//! used for workload statistics only. Enforcing it during allocation is
//! a documented extension point, not implemented in the baseline.

use serde::{Deserialize, Serialize};

/// An instructor referenced by subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Weekly teaching load cap (reporting only).
    pub max_hours_per_week: i32,
}

impl Instructor {
    /// Creates a new instructor with the default 18-hour weekly load.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_hours_per_week: 18,
        }
    }

    /// Sets the instructor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the weekly load cap.
    pub fn with_max_hours(mut self, hours: i32) -> Self {
        self.max_hours_per_week = hours;
        self
    }
}
