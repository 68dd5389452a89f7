//! Timetable generation: prioritization, placement, and conflicts.
//!
//! # Algorithm
//!
//! [`GreedyScheduler`] places subjects in priority order (core, then lab,
//! then elective/tutorial; heavier weekly loads first). For each required
//! weekly hour it scans the open grid cells day-major, keeps those the
//! placement rules permit, scores the survivors by time-of-day
//! preference, and commits the best-scoring cell with the first free
//! type-matching room. Commits are final: the algorithm never backtracks
//! within a run, and a subject that exhausts its attempt budget is
//! recorded as a shortfall rather than failing the run.
//!
//! # Modules
//!
//! - **`priority`**: subject ordering
//! - **`placement`**: composable hard rules and slot preference scoring
//! - **`rooms`**: room allocation
//! - **`grid`**: per-run occupancy grid
//! - **`conflicts`**: post-hoc double-booking detection and best-effort
//!   resolution
//! - **`stats`**: aggregate schedule reporting
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod conflicts;
mod generate;
mod grid;
mod placement;
mod priority;
mod rooms;
mod stats;

pub use conflicts::{detect, resolve};
pub use generate::{GenerationOutcome, GreedyScheduler, ATTEMPTS_PER_SUBJECT};
pub use grid::TimetableGrid;
pub use placement::{score_slot, AvoidEarlyLabs, PlacementRule, RuleSet, BASE_SCORE};
pub use priority::prioritize;
pub use rooms::find_room;
pub use stats::ScheduleStatistics;
