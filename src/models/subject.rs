//! Subject model.
//!
//! A subject is a course requiring a fixed number of weekly one-slot
//! sessions, taught by one instructor. Immutable input to a single
//! generation run.

use serde::{Deserialize, Serialize};

/// Subject classification.
///
/// Drives allocation priority, slot preferences, and room requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectType {
    /// Mandatory course; scheduled first, prefers mornings.
    Core,
    /// Optional course; prefers afternoons.
    Elective,
    /// Practical session; requires a lab room, prefers late morning.
    Lab,
    /// Small-group session.
    Tutorial,
}

impl SubjectType {
    /// Whether subjects of this type require a lab room.
    pub fn is_lab(&self) -> bool {
        matches!(self, SubjectType::Lab)
    }

    /// Display color for timetable rendering.
    pub fn color_tag(&self) -> &'static str {
        match self {
            SubjectType::Core => "#1e88e5",
            SubjectType::Elective => "#43a047",
            SubjectType::Lab => "#8e24aa",
            SubjectType::Tutorial => "#fb8c00",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            SubjectType::Core => "Core",
            SubjectType::Elective => "Elective",
            SubjectType::Lab => "Lab",
            SubjectType::Tutorial => "Tutorial",
        }
    }
}

/// A subject to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Subject classification.
    pub subject_type: SubjectType,
    /// Required weekly sessions (one slot each). Must be positive.
    pub hours_per_week: i32,
    /// Assigned instructor (by ID; never mutated by the engine).
    pub instructor_id: String,
    /// Enrollment cap.
    pub max_students: i32,
}

impl Subject {
    /// Creates a new subject with one weekly hour.
    pub fn new(id: impl Into<String>, subject_type: SubjectType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject_type,
            hours_per_week: 1,
            instructor_id: String::new(),
            max_students: 60,
        }
    }

    /// Creates a core subject.
    pub fn core(id: impl Into<String>) -> Self {
        Self::new(id, SubjectType::Core)
    }

    /// Creates an elective subject.
    pub fn elective(id: impl Into<String>) -> Self {
        Self::new(id, SubjectType::Elective)
    }

    /// Creates a lab subject.
    pub fn lab(id: impl Into<String>) -> Self {
        Self::new(id, SubjectType::Lab)
    }

    /// Creates a tutorial subject.
    pub fn tutorial(id: impl Into<String>) -> Self {
        Self::new(id, SubjectType::Tutorial)
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the required weekly hours.
    pub fn with_weekly_hours(mut self, hours: i32) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = instructor_id.into();
        self
    }

    /// Sets the enrollment cap.
    pub fn with_max_students(mut self, max_students: i32) -> Self {
        self.max_students = max_students;
        self
    }
}
