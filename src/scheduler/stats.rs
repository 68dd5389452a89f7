//! Schedule statistics.
//!
//! Aggregates a completed timetable into a report for department review.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total slots | Number of committed entries |
//! | Slots by type | Entry count per subject type |
//! | Slots by instructor | Entry count per instructor |
//! | Slots by day | Entry count per working day |
//! | Instructor load | Assigned hours / weekly maximum |
//! | Room utilization | Busy minutes / calendar minutes |

use std::collections::HashMap;

use crate::models::{Day, Instructor, Subject, SubjectType, Timetable, WorkingCalendar};

/// Aggregate report over a generated timetable.
///
/// Ratios are plain fractions (0.0..); an instructor load above 1.0
/// means the schedule exceeds that instructor's weekly maximum.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStatistics {
    /// Number of committed entries.
    pub total_slots: usize,
    /// Entry counts keyed by subject type.
    pub slots_by_type: HashMap<SubjectType, usize>,
    /// Entry counts keyed by instructor id.
    pub slots_by_instructor: HashMap<String, usize>,
    /// Entry counts keyed by working day.
    pub slots_by_day: HashMap<Day, usize>,
    /// Assigned hours over weekly maximum, per instructor id.
    ///
    /// Only instructors from the input roster appear; unrostered ids in
    /// entries still count in `slots_by_instructor`.
    pub instructor_load: HashMap<String, f64>,
    /// Busy minutes over the calendar's weekly teaching minutes, per
    /// room id. Rooms with no entries are absent.
    pub room_utilization: HashMap<String, f64>,
}

impl ScheduleStatistics {
    /// Computes statistics from a timetable and its inputs.
    ///
    /// Entries referencing a subject id missing from `subjects` still
    /// count toward totals but contribute nothing to `slots_by_type`.
    pub fn calculate(
        timetable: &Timetable,
        subjects: &[Subject],
        instructors: &[Instructor],
        calendar: &WorkingCalendar,
    ) -> Self {
        let entries = timetable.entries();

        let mut slots_by_type: HashMap<SubjectType, usize> = HashMap::new();
        let mut slots_by_instructor: HashMap<String, usize> = HashMap::new();
        let mut slots_by_day: HashMap<Day, usize> = HashMap::new();
        let mut minutes_by_instructor: HashMap<&str, i32> = HashMap::new();
        let mut minutes_by_room: HashMap<&str, i32> = HashMap::new();

        for entry in entries {
            if let Some(subject) = subjects.iter().find(|s| s.id == entry.subject_id) {
                *slots_by_type.entry(subject.subject_type).or_insert(0) += 1;
            }
            *slots_by_instructor
                .entry(entry.instructor_id.clone())
                .or_insert(0) += 1;
            *slots_by_day.entry(entry.day).or_insert(0) += 1;
            *minutes_by_instructor
                .entry(entry.instructor_id.as_str())
                .or_insert(0) += entry.duration_min();
            *minutes_by_room.entry(entry.room_id.as_str()).or_insert(0) += entry.duration_min();
        }

        let mut instructor_load = HashMap::new();
        for instructor in instructors {
            let assigned_min = minutes_by_instructor
                .get(instructor.id.as_str())
                .copied()
                .unwrap_or(0);
            let load = if instructor.max_hours_per_week > 0 {
                (assigned_min as f64 / 60.0) / instructor.max_hours_per_week as f64
            } else {
                0.0
            };
            instructor_load.insert(instructor.id.clone(), load);
        }

        let weekly_min = calendar.weekly_minutes();
        let mut room_utilization = HashMap::new();
        if weekly_min > 0 {
            for (room_id, busy_min) in &minutes_by_room {
                room_utilization.insert((*room_id).to_string(), *busy_min as f64 / weekly_min as f64);
            }
        }

        Self {
            total_slots: entries.len(),
            slots_by_type,
            slots_by_instructor,
            slots_by_day,
            instructor_load,
            room_utilization,
        }
    }

    /// Instructors whose assigned hours exceed their weekly maximum.
    pub fn overloaded_instructors(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .instructor_load
            .iter()
            .filter(|(_, load)| **load > 1.0)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{hm, GenerationConstraints, Room, ScheduleEntry, TimeSlot};

    fn entry(subject: &Subject, room: &Room, day: Day, start: i32) -> ScheduleEntry {
        ScheduleEntry::new(subject, room, day, &TimeSlot::teaching(start, start + 60))
    }

    fn calendar() -> WorkingCalendar {
        WorkingCalendar::from_constraints(&GenerationConstraints::default())
    }

    #[test]
    fn test_counts_by_type_instructor_and_day() {
        let subjects = vec![
            Subject::core("CS101").with_instructor("I1"),
            Subject::lab("PH202").with_instructor("I2"),
        ];
        let room = Room::classroom("R1");
        let lab_room = Room::laboratory("L1");

        let mut timetable = Timetable::new();
        timetable.add_entry(entry(&subjects[0], &room, Day::Monday, hm(9, 0)));
        timetable.add_entry(entry(&subjects[0], &room, Day::Tuesday, hm(9, 0)));
        timetable.add_entry(entry(&subjects[1], &lab_room, Day::Monday, hm(10, 0)));

        let instructors = vec![Instructor::new("I1"), Instructor::new("I2")];
        let stats =
            ScheduleStatistics::calculate(&timetable, &subjects, &instructors, &calendar());

        assert_eq!(stats.total_slots, 3);
        assert_eq!(stats.slots_by_type[&SubjectType::Core], 2);
        assert_eq!(stats.slots_by_type[&SubjectType::Lab], 1);
        assert_eq!(stats.slots_by_instructor["I1"], 2);
        assert_eq!(stats.slots_by_instructor["I2"], 1);
        assert_eq!(stats.slots_by_day[&Day::Monday], 2);
        assert_eq!(stats.slots_by_day[&Day::Tuesday], 1);
    }

    #[test]
    fn test_instructor_load_ratio() {
        let subjects = vec![Subject::core("CS101").with_instructor("I1")];
        let room = Room::classroom("R1");

        let mut timetable = Timetable::new();
        for day in [Day::Monday, Day::Tuesday, Day::Wednesday] {
            timetable.add_entry(entry(&subjects[0], &room, day, hm(9, 0)));
        }

        // 3 assigned hours over a 6-hour weekly maximum
        let instructors = vec![
            Instructor::new("I1").with_max_hours(6),
            Instructor::new("idle"),
        ];
        let stats =
            ScheduleStatistics::calculate(&timetable, &subjects, &instructors, &calendar());

        assert!((stats.instructor_load["I1"] - 0.5).abs() < 1e-10);
        assert!((stats.instructor_load["idle"] - 0.0).abs() < 1e-10);
        assert!(stats.overloaded_instructors().is_empty());
    }

    #[test]
    fn test_overloaded_instructor_reported() {
        let subjects = vec![Subject::core("CS101").with_instructor("I1")];
        let room = Room::classroom("R1");

        let mut timetable = Timetable::new();
        timetable.add_entry(entry(&subjects[0], &room, Day::Monday, hm(9, 0)));
        timetable.add_entry(entry(&subjects[0], &room, Day::Monday, hm(10, 0)));

        let instructors = vec![Instructor::new("I1").with_max_hours(1)];
        let stats =
            ScheduleStatistics::calculate(&timetable, &subjects, &instructors, &calendar());

        assert!((stats.instructor_load["I1"] - 2.0).abs() < 1e-10);
        assert_eq!(stats.overloaded_instructors(), vec!["I1"]);
    }

    #[test]
    fn test_room_utilization() {
        let subjects = vec![Subject::core("CS101").with_instructor("I1")];
        let room = Room::classroom("R1");

        // 2-slot single-day calendar: 120 weekly minutes
        let constraints = GenerationConstraints::new()
            .with_working_days(1)
            .with_window(hm(9, 0), hm(11, 0));
        let calendar = WorkingCalendar::from_constraints(&constraints);

        let mut timetable = Timetable::new();
        timetable.add_entry(entry(&subjects[0], &room, Day::Monday, hm(9, 0)));

        let stats = ScheduleStatistics::calculate(
            &timetable,
            &subjects,
            &[Instructor::new("I1")],
            &calendar,
        );
        assert!((stats.room_utilization["R1"] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_subject_skips_type_count() {
        let room = Room::classroom("R1");
        let ghost = Subject::core("GONE").with_instructor("I1");

        let mut timetable = Timetable::new();
        timetable.add_entry(entry(&ghost, &room, Day::Monday, hm(9, 0)));

        // Roster does not contain GONE
        let stats = ScheduleStatistics::calculate(&timetable, &[], &[], &calendar());
        assert_eq!(stats.total_slots, 1);
        assert!(stats.slots_by_type.is_empty());
        assert_eq!(stats.slots_by_instructor["I1"], 1);
    }

    #[test]
    fn test_empty_timetable() {
        let stats = ScheduleStatistics::calculate(&Timetable::new(), &[], &[], &calendar());
        assert_eq!(stats.total_slots, 0);
        assert!(stats.slots_by_type.is_empty());
        assert!(stats.instructor_load.is_empty());
        assert!(stats.room_utilization.is_empty());
    }
}
