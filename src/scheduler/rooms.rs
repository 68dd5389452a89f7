//! Room allocation.
//!
//! Given a chosen day/slot and a subject, finds a room that matches the
//! subject's type requirement and is free at that time. `None` means the
//! slot is rejected for this attempt, never a fatal error.

use crate::models::{Day, Room, ScheduleEntry, Subject, TimeSlot};

/// Finds a free, type-matching room for a placement.
///
/// A room qualifies when:
/// - `room.is_lab` matches `subject` requiring a lab, in both directions
///   (lab subjects take only lab rooms; lab rooms host only lab
///   sessions), and
/// - no committed entry already occupies the room at an overlapping time
///   on that day.
///
/// Among qualifying rooms the first in input order wins, so identical
/// inputs always pick the same room.
pub fn find_room<'a>(
    day: Day,
    slot: &TimeSlot,
    subject: &Subject,
    rooms: &'a [Room],
    committed: &[ScheduleEntry],
) -> Option<&'a Room> {
    rooms
        .iter()
        .filter(|room| room.is_lab == subject.subject_type.is_lab())
        .find(|room| {
            committed.iter().all(|entry| {
                entry.room_id != room.id
                    || entry.day != day
                    || entry.start_min >= slot.end_min
                    || slot.start_min >= entry.end_min
            })
        })
}
