//! Generation constraints (configuration).
//!
//! The recognized options for a generation run, with explicit defaults
//! and out-of-range clamping. Replaces an untyped option bag: unknown
//! options cannot exist, and defaults are applied in one place.

use serde::{Deserialize, Serialize};

use super::time::hm;

/// Configuration for a single generation run.
///
/// Out-of-range values are clamped to defaults via
/// [`normalized`](GenerationConstraints::normalized), which the scheduler
/// applies once at its entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConstraints {
    /// Number of working days, Monday onward (1..=6, default 5).
    pub working_days: i32,
    /// Earliest assignable slot start (minutes since midnight, default 09:00).
    pub start_min: i32,
    /// End of the assignable window (exclusive, default 17:00).
    pub end_min: i32,
    /// Hard rule: lab subjects may not start before 10:00.
    pub avoid_early_labs: bool,
    /// Run the best-effort conflict resolver after generation.
    pub auto_resolve_conflicts: bool,
}

impl Default for GenerationConstraints {
    fn default() -> Self {
        Self {
            working_days: 5,
            start_min: hm(9, 0),
            end_min: hm(17, 0),
            avoid_early_labs: false,
            auto_resolve_conflicts: false,
        }
    }
}

impl GenerationConstraints {
    /// Creates constraints with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of working days.
    pub fn with_working_days(mut self, days: i32) -> Self {
        self.working_days = days;
        self
    }

    /// Sets the assignable window `[start, end)` in minutes since midnight.
    pub fn with_window(mut self, start_min: i32, end_min: i32) -> Self {
        self.start_min = start_min;
        self.end_min = end_min;
        self
    }

    /// Enables or disables the early-lab exclusion.
    pub fn with_avoid_early_labs(mut self, avoid: bool) -> Self {
        self.avoid_early_labs = avoid;
        self
    }

    /// Enables or disables post-generation conflict resolution.
    pub fn with_auto_resolve_conflicts(mut self, resolve: bool) -> Self {
        self.auto_resolve_conflicts = resolve;
        self
    }

    /// Returns a copy with out-of-range values clamped to defaults.
    ///
    /// - `working_days` outside 1..=6 falls back to 5.
    /// - A window that is inverted, empty, or outside the day falls back
    ///   to 09:00–17:00.
    pub fn normalized(&self) -> Self {
        let mut c = self.clone();
        if !(1..=6).contains(&c.working_days) {
            c.working_days = 5;
        }
        if c.start_min < 0 || c.end_min > hm(24, 0) || c.start_min >= c.end_min {
            c.start_min = hm(9, 0);
            c.end_min = hm(17, 0);
        }
        c
    }
}
