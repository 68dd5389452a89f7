//! Schedule entries, conflicts, and the timetable container.
//!
//! A [`ScheduleEntry`] records one committed (subject-hour, slot, room)
//! triple. Entries are immutable once committed and live only for the
//! generation run that produced them: regeneration replaces the whole
//! sequence, never diffs it.

use serde::{Deserialize, Serialize};

use super::calendar::Day;
use super::room::Room;
use super::subject::{Subject, SubjectType};
use super::time::{fmt_min, TimeSlot};

/// Session classification carried on each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Lab,
    Tutorial,
}

impl From<SubjectType> for SessionKind {
    fn from(subject_type: SubjectType) -> Self {
        match subject_type {
            SubjectType::Core | SubjectType::Elective => SessionKind::Lecture,
            SubjectType::Lab => SessionKind::Lab,
            SubjectType::Tutorial => SessionKind::Tutorial,
        }
    }
}

/// One committed session on the timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Scheduled subject.
    pub subject_id: String,
    /// Teaching instructor (denormalized from the subject).
    pub instructor_id: String,
    /// Allocated room.
    pub room_id: String,
    /// Working day.
    pub day: Day,
    /// Session start (minutes since midnight).
    pub start_min: i32,
    /// Session end (exclusive).
    pub end_min: i32,
    /// Session classification.
    pub session_kind: SessionKind,
    /// Display color, derived from the subject type.
    pub color_tag: String,
}

impl ScheduleEntry {
    /// Creates an entry committing `subject` to `slot` in `room` on `day`.
    pub fn new(subject: &Subject, room: &Room, day: Day, slot: &TimeSlot) -> Self {
        Self {
            subject_id: subject.id.clone(),
            instructor_id: subject.instructor_id.clone(),
            room_id: room.id.clone(),
            day,
            start_min: slot.start_min,
            end_min: slot.end_min,
            session_kind: SessionKind::from(subject.subject_type),
            color_tag: subject.subject_type.color_tag().to_string(),
        }
    }

    /// Session duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Whether two entries occupy overlapping time on the same day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }
}

/// Double-booking classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// The same instructor in two overlapping sessions.
    Instructor,
    /// The same room hosting two overlapping sessions.
    Room,
}

/// A detected double-booking between two entries.
///
/// Derived from a schedule, never persisted independently of the run
/// that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Conflict classification.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
    /// The first-seen entry of the pair (in schedule order).
    pub first: ScheduleEntry,
    /// The later entry of the pair.
    pub second: ScheduleEntry,
}

impl Conflict {
    /// Creates an instructor double-booking conflict.
    pub fn instructor(first: ScheduleEntry, second: ScheduleEntry) -> Self {
        let message = format!(
            "Instructor '{}' is double-booked on {} at {} ({} and {})",
            second.instructor_id,
            second.day,
            fmt_min(second.start_min),
            first.subject_id,
            second.subject_id,
        );
        Self {
            kind: ConflictKind::Instructor,
            message,
            first,
            second,
        }
    }

    /// Creates a room double-booking conflict.
    pub fn room(first: ScheduleEntry, second: ScheduleEntry) -> Self {
        let message = format!(
            "Room '{}' is double-booked on {} at {} ({} and {})",
            second.room_id,
            second.day,
            fmt_min(second.start_min),
            first.subject_id,
            second.subject_id,
        );
        Self {
            kind: ConflictKind::Room,
            message,
            first,
            second,
        }
    }
}

/// A non-fatal per-subject scheduling gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shortfall {
    /// Affected subject.
    pub subject_id: String,
    /// Weekly hours the subject requires.
    pub required_hours: i32,
    /// Hours actually placed within the attempt budget.
    pub scheduled_hours: i32,
}

/// The committed schedule of one generation run.
///
/// Holds the ordered entry sequence plus any shortfall warnings. The
/// caller persists the entries with a full replace of any prior run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed entries, in commit order.
    pub entries: Vec<ScheduleEntry>,
    /// Subjects whose weekly hours could not all be placed.
    pub shortfalls: Vec<Shortfall>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a committed entry.
    pub fn add_entry(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    /// Records a scheduling shortfall.
    pub fn add_shortfall(&mut self, shortfall: Shortfall) {
        self.shortfalls.push(shortfall);
    }

    /// Replaces the entry at `index` (used by the conflict resolver).
    pub fn replace_entry(&mut self, index: usize, entry: ScheduleEntry) {
        self.entries[index] = entry;
    }

    /// Committed entries, in commit order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of committed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether every subject received its full weekly hours.
    pub fn is_fully_scheduled(&self) -> bool {
        self.shortfalls.is_empty()
    }

    /// Entries for one subject.
    pub fn entries_for_subject(&self, subject_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.subject_id == subject_id)
            .collect()
    }

    /// Entries taught by one instructor.
    pub fn entries_for_instructor(&self, instructor_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.instructor_id == instructor_id)
            .collect()
    }

    /// Entries hosted in one room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&ScheduleEntry> {
        self.entries
            .iter()
            .filter(|e| e.room_id == room_id)
            .collect()
    }

    /// Entries on one day.
    pub fn entries_for_day(&self, day: Day) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Number of weekly sessions placed for a subject.
    pub fn scheduled_slots(&self, subject_id: &str) -> i32 {
        self.entries_for_subject(subject_id).len() as i32
    }
}
