//! Greedy timetable generation.
//!
//! # Algorithm
//!
//! 1. Validate input; build the working calendar and a fresh grid.
//! 2. Order subjects by priority (core → lab → elective/tutorial,
//!    heavier weekly loads first).
//! 3. For each subject, repeatedly place one weekly hour: scan open
//!    cells day-major, keep those the placement rules permit, score the
//!    survivors, and take the best (earliest-enumerated on ties). Ask
//!    the room allocator; commit on success, consume one attempt on a
//!    room miss. Stop the subject early when no eligible cell remains.
//! 4. Detect conflicts, optionally resolve them, compute statistics.
//!
//! Greedy and non-backtracking: committed entries are never displaced
//! within a run. A subject that cannot get all its hours is a recorded
//! shortfall, not an error.
//!
//! # Complexity
//! O(s * h * c * r) where s=subjects, h=hours/subject, c=grid cells,
//! r=rooms.

use log::{debug, info, warn};

use crate::models::{
    GenerationConstraints, Instructor, Room, ScheduleEntry, Shortfall, Subject, Timetable,
    WorkingCalendar,
};
use crate::validation::{validate_input, ValidationError};

use super::conflicts::{detect, resolve};
use super::grid::TimetableGrid;
use super::placement::{score_slot, PlacementRule, RuleSet};
use super::priority::prioritize;
use super::rooms::find_room;
use super::stats::ScheduleStatistics;

/// Retry budget per subject. Only room-allocation misses consume
/// attempts; successful commits do not.
pub const ATTEMPTS_PER_SUBJECT: u32 = 10;

/// The complete result of one generation run.
///
/// Handed back to the persistence layer, which replaces any prior
/// entries for the same timetable wholesale.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Committed entries and shortfall warnings.
    pub timetable: Timetable,
    /// Double-bookings remaining after optional resolution.
    pub conflicts: Vec<crate::models::Conflict>,
    /// Aggregate schedule report.
    pub statistics: ScheduleStatistics,
}

/// Greedy, priority-driven timetable generator.
///
/// Each invocation of [`generate`](GreedyScheduler::generate) owns its
/// working grid and output sequence; the scheduler itself holds only
/// configuration and may be reused across runs.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{GenerationConstraints, Instructor, Room, Subject};
/// use timetable_engine::scheduler::GreedyScheduler;
///
/// let subjects = vec![Subject::core("CS101").with_weekly_hours(2).with_instructor("I1")];
/// let rooms = vec![Room::classroom("R1")];
/// let instructors = vec![Instructor::new("I1")];
///
/// let scheduler = GreedyScheduler::new(GenerationConstraints::default());
/// let outcome = scheduler.generate(&subjects, &rooms, &instructors).unwrap();
/// assert_eq!(outcome.timetable.entry_count(), 2);
/// assert!(outcome.conflicts.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyScheduler {
    constraints: GenerationConstraints,
    rules: RuleSet,
}

impl GreedyScheduler {
    /// Creates a scheduler with the standard rule set.
    ///
    /// Constraints are normalized once here; out-of-range values fall
    /// back to defaults.
    pub fn new(constraints: GenerationConstraints) -> Self {
        Self {
            constraints: constraints.normalized(),
            rules: RuleSet::standard(),
        }
    }

    /// Adds a placement rule to the conjunction.
    pub fn with_rule<R: PlacementRule + 'static>(mut self, rule: R) -> Self {
        self.rules = self.rules.with_rule(rule);
        self
    }

    /// The normalized constraints in effect.
    pub fn constraints(&self) -> &GenerationConstraints {
        &self.constraints
    }

    /// Generates a weekly timetable.
    ///
    /// Fails only on invalid input; scheduling shortfalls and
    /// unresolved conflicts degrade into the returned outcome.
    pub fn generate(
        &self,
        subjects: &[Subject],
        rooms: &[Room],
        instructors: &[Instructor],
    ) -> Result<GenerationOutcome, Vec<ValidationError>> {
        validate_input(subjects, rooms, instructors, &self.constraints)?;

        let calendar = WorkingCalendar::from_constraints(&self.constraints);
        let mut grid = TimetableGrid::new(&calendar);
        let mut timetable = Timetable::new();

        for &subject_idx in &prioritize(subjects) {
            self.schedule_subject(&subjects[subject_idx], rooms, &calendar, &mut grid, &mut timetable);
        }

        let detected = detect(timetable.entries());
        let conflicts = if self.constraints.auto_resolve_conflicts && !detected.is_empty() {
            resolve(
                &mut timetable,
                &detected,
                subjects,
                rooms,
                &calendar,
                &self.rules,
                &self.constraints,
            )
        } else {
            detected
        };

        let statistics =
            ScheduleStatistics::calculate(&timetable, subjects, instructors, &calendar);

        info!(
            "Generated {} entries for {} subjects ({} shortfalls, {} conflicts)",
            timetable.entry_count(),
            subjects.len(),
            timetable.shortfalls.len(),
            conflicts.len()
        );

        Ok(GenerationOutcome {
            timetable,
            conflicts,
            statistics,
        })
    }

    /// Places one subject's weekly hours into the grid.
    fn schedule_subject(
        &self,
        subject: &Subject,
        rooms: &[Room],
        calendar: &WorkingCalendar,
        grid: &mut TimetableGrid,
        timetable: &mut Timetable,
    ) {
        let needed = subject.hours_per_week;
        let mut scheduled = 0;
        let mut attempts = 0;

        while scheduled < needed && attempts < ATTEMPTS_PER_SUBJECT {
            let Some((day_idx, slot_idx)) =
                best_open_cell(subject, calendar, grid, &self.rules, &self.constraints)
            else {
                // The grid only shrinks; further attempts cannot help.
                break;
            };

            let day = calendar.days()[day_idx];
            let slot = &calendar.slots()[slot_idx];

            match find_room(day, slot, subject, rooms, timetable.entries()) {
                Some(room) => {
                    debug!(
                        "Committed {} to {} {} in {}",
                        subject.id,
                        day,
                        crate::models::fmt_min(slot.start_min),
                        room.id
                    );
                    timetable.add_entry(ScheduleEntry::new(subject, room, day, slot));
                    grid.occupy(day_idx, slot_idx);
                    scheduled += 1;
                }
                None => {
                    // Slot rejected; the cell stays open.
                    attempts += 1;
                }
            }
        }

        if scheduled < needed {
            warn!(
                "Subject '{}' scheduled {}/{} weekly hours",
                subject.id, scheduled, needed
            );
            timetable.add_shortfall(Shortfall {
                subject_id: subject.id.clone(),
                required_hours: needed,
                scheduled_hours: scheduled,
            });
        }
    }
}

/// Finds the best-scoring eligible open cell for a subject.
///
/// Cells are scanned in day-major, slot-major order; a strict `>`
/// comparison keeps the earliest-enumerated cell on score ties.
pub(crate) fn best_open_cell(
    subject: &Subject,
    calendar: &WorkingCalendar,
    grid: &TimetableGrid,
    rules: &RuleSet,
    constraints: &GenerationConstraints,
) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, i32)> = None;
    for (day_idx, slot_idx) in grid.open_cells() {
        let day = calendar.days()[day_idx];
        let slot = &calendar.slots()[slot_idx];
        if !rules.permits(subject, day, slot.start_min, constraints) {
            continue;
        }
        let score = score_slot(subject, day, slot.start_min);
        if best.map_or(true, |(_, _, b)| score > b) {
            best = Some((day_idx, slot_idx, score));
        }
    }
    best.map(|(day_idx, slot_idx, _)| (day_idx, slot_idx))
}
