//! Timetable generation and conflict engine for academic departments.
//!
//! Allocates weekly class sessions to time slots, rooms, and instructors,
//! subject to hard feasibility rules (no double-booking, lab subjects in
//! lab rooms) and soft time-of-day preferences. The allocator is a greedy,
//! non-backtracking heuristic with a bounded per-subject retry budget:
//! best-effort, not an exact constraint solver.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `TimeSlot`, `WorkingCalendar`, `Subject`,
//!   `Room`, `Instructor`, `ScheduleEntry`, `Timetable`, `Conflict`,
//!   `GenerationConstraints`
//! - **`validation`**: Input integrity checks (empty inputs, duplicate IDs,
//!   non-positive weekly hours, empty calendars)
//! - **`scheduler`**: Subject prioritization, slot scoring, room allocation,
//!   the greedy generation loop, conflict detection/resolution, and
//!   schedule statistics
//!
//! # Architecture
//!
//! The engine is a pure synchronous computation: the surrounding
//! persistence and request layers supply input collections, invoke
//! [`scheduler::GreedyScheduler::generate`], and store the resulting
//! entries. Each invocation owns its working grid; nothing is shared
//! between runs.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod models;
pub mod scheduler;
pub mod validation;
