//! Input validation for generation runs.
//!
//! Checks structural integrity of subjects, rooms, instructors, and the
//! configured calendar before any scheduling work begins. Detects:
//! - Empty subject lists
//! - Non-positive weekly hours
//! - Empty working calendars (no assignable day/slot cells)
//! - Duplicate IDs
//! - Subjects referencing unknown instructors
//!
//! These are the only fatal failures in the engine; everything past
//! validation degrades gracefully into the returned report.

use std::collections::HashSet;

use crate::models::{GenerationConstraints, Instructor, Room, Subject, WorkingCalendar};

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
    /// No subjects were supplied.
    EmptySubjects,
    /// A subject requires zero or negative weekly hours.
    InvalidHours,
    /// The constraints produce a calendar with no assignable cells.
    EmptyCalendar,
    /// Two entities share the same ID.
    DuplicateId,
    /// A subject references an instructor that doesn't exist.
    UnknownInstructor,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input data for a generation run.
///
/// Checks:
/// 1. At least one subject
/// 2. Every subject requires a positive number of weekly hours
/// 3. The calendar derived from the constraints has assignable cells
/// 4. No duplicate subject, room, or instructor IDs
/// 5. Subject instructor references resolve (only when instructors are
///    supplied; an empty instructor list skips the check, since
///    instructors feed statistics only)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    subjects: &[Subject],
    rooms: &[Room],
    instructors: &[Instructor],
    constraints: &GenerationConstraints,
) -> ValidationResult {
    let mut errors = Vec::new();

    if subjects.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptySubjects,
            "No subjects to schedule",
        ));
    }

    if WorkingCalendar::from_constraints(constraints).is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCalendar,
            "Constraints leave no assignable slots in the working week",
        ));
    }

    let mut subject_ids = HashSet::new();
    for s in subjects {
        if !subject_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate subject ID: {}", s.id),
            ));
        }
        if s.hours_per_week <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidHours,
                format!(
                    "Subject '{}' requires {} weekly hours; must be positive",
                    s.id, s.hours_per_week
                ),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut instructor_ids = HashSet::new();
    for i in instructors {
        if !instructor_ids.insert(i.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate instructor ID: {}", i.id),
            ));
        }
    }

    // Instructor references matter only when an instructor list is given.
    if !instructors.is_empty() {
        for s in subjects {
            if !s.instructor_id.is_empty() && !instructor_ids.contains(s.instructor_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownInstructor,
                    format!(
                        "Subject '{}' references unknown instructor '{}'",
                        s.id, s.instructor_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hm;

    fn sample_subjects() -> Vec<Subject> {
        vec![
            Subject::core("CS101").with_weekly_hours(3).with_instructor("I1"),
            Subject::lab("PH202").with_weekly_hours(2).with_instructor("I2"),
        ]
    }

    fn sample_rooms() -> Vec<Room> {
        vec![Room::classroom("R1"), Room::laboratory("L1")]
    }

    fn sample_instructors() -> Vec<Instructor> {
        vec![Instructor::new("I1"), Instructor::new("I2")]
    }

    #[test]
    fn test_valid_input() {
        let result = validate_input(
            &sample_subjects(),
            &sample_rooms(),
            &sample_instructors(),
            &GenerationConstraints::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_empty_subjects() {
        let errors = validate_input(
            &[],
            &sample_rooms(),
            &[],
            &GenerationConstraints::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySubjects));
    }

    #[test]
    fn test_non_positive_hours() {
        let subjects = vec![Subject::core("CS101").with_weekly_hours(0)];
        let errors =
            validate_input(&subjects, &[], &[], &GenerationConstraints::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidHours));
    }

    #[test]
    fn test_empty_calendar() {
        // Valid window with no slot starts inside it
        let constraints = GenerationConstraints::new().with_window(hm(12, 20), hm(12, 50));
        let errors =
            validate_input(&sample_subjects(), &sample_rooms(), &[], &constraints).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCalendar));
    }

    #[test]
    fn test_duplicate_subject_id() {
        let subjects = vec![
            Subject::core("CS101").with_weekly_hours(1),
            Subject::elective("CS101").with_weekly_hours(1),
        ];
        let errors =
            validate_input(&subjects, &[], &[], &GenerationConstraints::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("subject")));
    }

    #[test]
    fn test_duplicate_room_id() {
        let rooms = vec![Room::classroom("R1"), Room::laboratory("R1")];
        let errors = validate_input(
            &sample_subjects(),
            &rooms,
            &[],
            &GenerationConstraints::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("room")));
    }

    #[test]
    fn test_unknown_instructor() {
        let subjects = vec![Subject::core("CS101").with_weekly_hours(1).with_instructor("GHOST")];
        let errors = validate_input(
            &subjects,
            &[],
            &sample_instructors(),
            &GenerationConstraints::default(),
        )
        .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownInstructor));
    }

    #[test]
    fn test_unknown_instructor_skipped_without_list() {
        // No instructor list supplied → references are not checked
        let subjects = vec![Subject::core("CS101").with_weekly_hours(1).with_instructor("GHOST")];
        assert!(validate_input(&subjects, &[], &[], &GenerationConstraints::default()).is_ok());
    }

    #[test]
    fn test_multiple_errors_collected() {
        let subjects = vec![
            Subject::core("A").with_weekly_hours(-1),
            Subject::core("A").with_weekly_hours(2),
        ];
        let errors =
            validate_input(&subjects, &[], &[], &GenerationConstraints::default()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
