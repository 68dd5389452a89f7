//! Post-hoc conflict detection and best-effort resolution.
//!
//! Detection scans a finished schedule (fresh from the generator or
//! externally edited) for instructor and room double-bookings. It uses
//! true interval-overlap testing (`start1 < end2 && start2 < end1`), so
//! offset-start overlaps are caught as well as same-start pairs; this is
//! deliberately stricter than key-equality detection and is covered
//! explicitly by tests.
//!
//! Resolution retries the slot search for the second entry of each
//! conflicting pair against the current occupancy, skipping conflicts a
//! previous relocation already cleared. It is best-effort: a conflict
//! with no feasible alternative stays in the returned sequence.

use std::collections::HashMap;

use log::{debug, info};

use crate::models::{
    Conflict, Day, GenerationConstraints, Room, ScheduleEntry, Subject, Timetable,
    WorkingCalendar,
};

use super::generate::best_open_cell;
use super::grid::TimetableGrid;
use super::placement::RuleSet;
use super::rooms::find_room;

/// Detects instructor and room double-bookings in a schedule.
///
/// Instructor conflicts are emitted first, then room conflicts; within
/// each kind, emission follows input entry order, and each conflict
/// pairs the first-seen entry with the later one.
pub fn detect(entries: &[ScheduleEntry]) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    let mut by_instructor: HashMap<(&str, Day), Vec<usize>> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let key = (entry.instructor_id.as_str(), entry.day);
        if let Some(seen) = by_instructor.get(&key) {
            for &j in seen {
                if entries[j].overlaps(entry) {
                    conflicts.push(Conflict::instructor(entries[j].clone(), entry.clone()));
                }
            }
        }
        by_instructor.entry(key).or_default().push(i);
    }

    let mut by_room: HashMap<(&str, Day), Vec<usize>> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let key = (entry.room_id.as_str(), entry.day);
        if let Some(seen) = by_room.get(&key) {
            for &j in seen {
                if entries[j].overlaps(entry) {
                    conflicts.push(Conflict::room(entries[j].clone(), entry.clone()));
                }
            }
        }
        by_room.entry(key).or_default().push(i);
    }

    conflicts
}

/// Attempts to reschedule the second entry of each conflict.
///
/// For each still-active conflict, reruns the slot search for the
/// offending entry's subject over cells no committed entry overlaps:
/// the contested cell is closed, and so is every cell an offset-start
/// entry touches. A cell chosen this way overlaps nothing, so the moved
/// entry cannot introduce a new instructor or room double-booking. On
/// success the entry is moved in place; otherwise the conflict is
/// returned as unresolved.
pub fn resolve(
    timetable: &mut Timetable,
    conflicts: &[Conflict],
    subjects: &[Subject],
    rooms: &[Room],
    calendar: &WorkingCalendar,
    rules: &RuleSet,
    constraints: &GenerationConstraints,
) -> Vec<Conflict> {
    let mut unresolved = Vec::new();

    for conflict in conflicts {
        if !still_active(timetable, conflict) {
            // A pair conflicting on both instructor and room produces two
            // findings; relocating the shared entry clears both.
            debug!("Conflict already cleared: {}", conflict.message);
            continue;
        }
        if try_relocate(timetable, &conflict.second, subjects, rooms, calendar, rules, constraints)
        {
            debug!("Resolved conflict: {}", conflict.message);
        } else {
            unresolved.push(conflict.clone());
        }
    }

    if !unresolved.is_empty() {
        info!(
            "{} of {} conflicts left unresolved",
            unresolved.len(),
            conflicts.len()
        );
    }
    unresolved
}

/// Whether both entries of the conflict are still committed unchanged.
fn still_active(timetable: &Timetable, conflict: &Conflict) -> bool {
    let present = |target: &ScheduleEntry| timetable.entries().iter().any(|e| e == target);
    present(&conflict.first) && present(&conflict.second)
}

fn try_relocate(
    timetable: &mut Timetable,
    target: &ScheduleEntry,
    subjects: &[Subject],
    rooms: &[Room],
    calendar: &WorkingCalendar,
    rules: &RuleSet,
    constraints: &GenerationConstraints,
) -> bool {
    let Some(index) = timetable.entries().iter().position(|e| e == target) else {
        return false;
    };
    let Some(subject) = subjects.iter().find(|s| s.id == target.subject_id) else {
        return false;
    };

    let grid = TimetableGrid::from_entries(calendar, timetable.entries());
    let Some((day_idx, slot_idx)) = best_open_cell(subject, calendar, &grid, rules, constraints)
    else {
        return false;
    };

    let day = calendar.days()[day_idx];
    let slot = &calendar.slots()[slot_idx];

    // The moving entry must not block its own replacement room search.
    let others: Vec<ScheduleEntry> = timetable
        .entries()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, e)| e.clone())
        .collect();

    let Some(room) = find_room(day, slot, subject, rooms, &others) else {
        return false;
    };

    timetable.replace_entry(index, ScheduleEntry::new(subject, room, day, slot));
    true
}
