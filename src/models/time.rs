//! Time slots and the daily slot template.
//!
//! The department day is a fixed sequence of teaching slots interleaved
//! with breaks. Break slots exist so the template describes the whole
//! day, but they are never assignable.
//!
//! # Time Model
//! All times are minutes since midnight. Slots are half-open intervals
//! `[start, end)`: a slot ending at 10:00 does not overlap one starting
//! at 10:00.

use serde::{Deserialize, Serialize};

/// Builds a minute-of-day value from hours and minutes.
#[inline]
pub const fn hm(hours: i32, minutes: i32) -> i32 {
    hours * 60 + minutes
}

/// Formats a minute-of-day value as `HH:MM`.
pub fn fmt_min(min: i32) -> String {
    format!("{:02}:{:02}", min / 60, min % 60)
}

/// Break classification for non-teaching slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    /// Short recess between sessions.
    Short,
    /// Midday lunch break.
    Lunch,
}

/// A slot in the daily template.
///
/// Either a teaching slot or a break. Immutable once the template is
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start (minutes since midnight, inclusive).
    pub start_min: i32,
    /// Slot end (minutes since midnight, exclusive).
    pub end_min: i32,
    /// Whether this slot is a break.
    pub is_break: bool,
    /// Break classification; `None` for teaching slots.
    pub break_kind: Option<BreakKind>,
}

impl TimeSlot {
    /// Creates a teaching slot.
    pub fn teaching(start_min: i32, end_min: i32) -> Self {
        Self {
            start_min,
            end_min,
            is_break: false,
            break_kind: None,
        }
    }

    /// Creates a short break slot.
    pub fn short_break(start_min: i32, end_min: i32) -> Self {
        Self {
            start_min,
            end_min,
            is_break: true,
            break_kind: Some(BreakKind::Short),
        }
    }

    /// Creates a lunch break slot.
    pub fn lunch_break(start_min: i32, end_min: i32) -> Self {
        Self {
            start_min,
            end_min,
            is_break: true,
            break_kind: Some(BreakKind::Lunch),
        }
    }

    /// Slot duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Whether a minute-of-day falls within this slot.
    #[inline]
    pub fn contains(&self, min: i32) -> bool {
        min >= self.start_min && min < self.end_min
    }

    /// Whether two slots overlap in time.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// The fixed daily slot template.
///
/// Hourly teaching slots with a mid-morning recess, a lunch break, and a
/// mid-afternoon recess:
///
/// | Slot | Kind |
/// |------|------|
/// | 09:00–10:00 | teaching |
/// | 10:00–11:00 | teaching |
/// | 11:00–11:15 | short break |
/// | 11:15–12:15 | teaching |
/// | 12:15–13:00 | lunch break |
/// | 13:00–14:00 | teaching |
/// | 14:00–15:00 | teaching |
/// | 15:00–15:15 | short break |
/// | 15:15–16:15 | teaching |
/// | 16:15–17:15 | teaching |
pub fn daily_template() -> Vec<TimeSlot> {
    vec![
        TimeSlot::teaching(hm(9, 0), hm(10, 0)),
        TimeSlot::teaching(hm(10, 0), hm(11, 0)),
        TimeSlot::short_break(hm(11, 0), hm(11, 15)),
        TimeSlot::teaching(hm(11, 15), hm(12, 15)),
        TimeSlot::lunch_break(hm(12, 15), hm(13, 0)),
        TimeSlot::teaching(hm(13, 0), hm(14, 0)),
        TimeSlot::teaching(hm(14, 0), hm(15, 0)),
        TimeSlot::short_break(hm(15, 0), hm(15, 15)),
        TimeSlot::teaching(hm(15, 15), hm(16, 15)),
        TimeSlot::teaching(hm(16, 15), hm(17, 15)),
    ]
}
