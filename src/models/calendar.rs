//! Working days and the weekly calendar.
//!
//! A [`WorkingCalendar`] is the cross product of the configured working
//! days with the assignable (non-break) slots of the daily template.
//! Day/slot pairs are unique by construction and break slots never
//! appear in it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constraints::GenerationConstraints;
use super::time::{daily_template, TimeSlot};

/// A working day of the week.
///
/// Saturday is included for six-day departments; Sunday is never a
/// working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All candidate working days, in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the working days for the given constraints.
///
/// The first `working_days` entries of Monday..Saturday, after clamping.
pub fn working_days(constraints: &GenerationConstraints) -> Vec<Day> {
    let c = constraints.normalized();
    Day::ALL[..c.working_days as usize].to_vec()
}

/// Returns the assignable slots for the given constraints.
///
/// Filters the daily template to teaching slots whose start falls within
/// `[start_min, end_min)`, after clamping. Break slots are excluded.
pub fn available_slots(constraints: &GenerationConstraints) -> Vec<TimeSlot> {
    let c = constraints.normalized();
    daily_template()
        .into_iter()
        .filter(|s| !s.is_break && s.start_min >= c.start_min && s.start_min < c.end_min)
        .collect()
}

/// The weekly grid of assignable day/slot pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkingCalendar {
    days: Vec<Day>,
    slots: Vec<TimeSlot>,
}

impl WorkingCalendar {
    /// Builds the calendar for the given constraints.
    pub fn from_constraints(constraints: &GenerationConstraints) -> Self {
        Self {
            days: working_days(constraints),
            slots: available_slots(constraints),
        }
    }

    /// Working days, in week order.
    pub fn days(&self) -> &[Day] {
        &self.days
    }

    /// Assignable slots, in day order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of assignable cells (days × slots).
    pub fn cell_count(&self) -> usize {
        self.days.len() * self.slots.len()
    }

    /// Whether the calendar has no assignable cells.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Total assignable minutes per week.
    pub fn weekly_minutes(&self) -> i32 {
        let per_day: i32 = self.slots.iter().map(TimeSlot::duration_min).sum();
        per_day * self.days.len() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::time::hm;

    #[test]
    fn test_working_days_default() {
        let days = working_days(&GenerationConstraints::default());
        assert_eq!(
            days,
            vec![Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday]
        );
    }

    #[test]
    fn test_working_days_six() {
        let c = GenerationConstraints::new().with_working_days(6);
        assert_eq!(working_days(&c).last(), Some(&Day::Saturday));
    }

    #[test]
    fn test_working_days_clamped() {
        let c = GenerationConstraints::new().with_working_days(0);
        assert_eq!(working_days(&c).len(), 5);
    }

    #[test]
    fn test_available_slots_default_window() {
        let slots = available_slots(&GenerationConstraints::default());
        // 09:00, 10:00, 11:15, 13:00, 14:00, 15:15, 16:15
        assert_eq!(slots.len(), 7);
        assert!(slots.iter().all(|s| !s.is_break));
        assert_eq!(slots[0].start_min, hm(9, 0));
        assert_eq!(slots.last().unwrap().start_min, hm(16, 15));
    }

    #[test]
    fn test_available_slots_narrow_window() {
        let c = GenerationConstraints::new().with_window(hm(9, 0), hm(12, 0));
        let slots = available_slots(&c);
        // 09:00, 10:00, 11:15
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2].start_min, hm(11, 15));
    }

    #[test]
    fn test_available_slots_excludes_breaks() {
        // Window covering the whole day still yields no breaks
        let c = GenerationConstraints::new().with_window(hm(8, 0), hm(18, 0));
        let slots = available_slots(&c);
        assert!(slots.iter().all(|s| s.break_kind.is_none()));
    }

    #[test]
    fn test_calendar_cell_count() {
        let cal = WorkingCalendar::from_constraints(&GenerationConstraints::default());
        assert_eq!(cal.cell_count(), 35); // 5 days × 7 slots
        assert!(!cal.is_empty());
    }

    #[test]
    fn test_calendar_empty_window() {
        // A valid window containing no slot starts
        let c = GenerationConstraints::new().with_window(hm(12, 20), hm(12, 50));
        let cal = WorkingCalendar::from_constraints(&c);
        assert!(cal.is_empty());
    }

    #[test]
    fn test_weekly_minutes() {
        let c = GenerationConstraints::new()
            .with_working_days(1)
            .with_window(hm(9, 0), hm(11, 0));
        let cal = WorkingCalendar::from_constraints(&c);
        assert_eq!(cal.weekly_minutes(), 120); // two one-hour slots
    }

    #[test]
    fn test_day_display() {
        assert_eq!(Day::Monday.to_string(), "Monday");
        assert_eq!(Day::Saturday.name(), "Saturday");
    }
}
