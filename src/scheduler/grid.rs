//! Per-run occupancy grid.
//!
//! Maps each (day, slot) cell of the working calendar to open/occupied
//! for O(1) occupancy tests during generation. The grid is owned by one
//! generation invocation and never shared across runs; a fresh run gets
//! a fresh grid.

use crate::models::{ScheduleEntry, WorkingCalendar};

/// Occupancy of the working calendar's day/slot cells.
///
/// Cells are addressed by `(day index, slot index)` into the calendar's
/// day and slot sequences. Enumeration is day-major, then slot-major;
/// the scorer relies on this order for tie-breaking.
#[derive(Debug, Clone)]
pub struct TimetableGrid {
    day_count: usize,
    slot_count: usize,
    occupied: Vec<bool>,
}

impl TimetableGrid {
    /// Creates an all-open grid for the calendar.
    pub fn new(calendar: &WorkingCalendar) -> Self {
        let day_count = calendar.days().len();
        let slot_count = calendar.slots().len();
        Self {
            day_count,
            slot_count,
            occupied: vec![false; day_count * slot_count],
        }
    }

    /// Builds a grid with every cell overlapped by an existing entry
    /// marked occupied. Used by the conflict resolver to reconstruct
    /// occupancy from an already-committed (possibly externally edited)
    /// schedule; an entry aligned with no template slot still closes
    /// every cell its interval touches.
    pub fn from_entries(calendar: &WorkingCalendar, entries: &[ScheduleEntry]) -> Self {
        let mut grid = Self::new(calendar);
        for entry in entries {
            let Some(di) = calendar.days().iter().position(|d| *d == entry.day) else {
                continue;
            };
            for (si, slot) in calendar.slots().iter().enumerate() {
                if slot.start_min < entry.end_min && entry.start_min < slot.end_min {
                    grid.occupy(di, si);
                }
            }
        }
        grid
    }

    /// Whether the cell is open.
    #[inline]
    pub fn is_open(&self, day_idx: usize, slot_idx: usize) -> bool {
        !self.occupied[self.index(day_idx, slot_idx)]
    }

    /// Marks the cell occupied.
    pub fn occupy(&mut self, day_idx: usize, slot_idx: usize) {
        let idx = self.index(day_idx, slot_idx);
        self.occupied[idx] = true;
    }

    /// Open cells in day-major, slot-major order.
    pub fn open_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for di in 0..self.day_count {
            for si in 0..self.slot_count {
                if self.is_open(di, si) {
                    cells.push((di, si));
                }
            }
        }
        cells
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.occupied.iter().filter(|o| !**o).count()
    }

    #[inline]
    fn index(&self, day_idx: usize, slot_idx: usize) -> usize {
        debug_assert!(day_idx < self.day_count && slot_idx < self.slot_count);
        day_idx * self.slot_count + slot_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        hm, Day, GenerationConstraints, Room, ScheduleEntry, Subject, TimeSlot, WorkingCalendar,
    };

    fn small_calendar() -> WorkingCalendar {
        // 2 days × 3 slots (09:00, 10:00, 11:15)
        let c = GenerationConstraints::new()
            .with_working_days(2)
            .with_window(hm(9, 0), hm(12, 0));
        WorkingCalendar::from_constraints(&c)
    }

    #[test]
    fn test_fresh_grid_all_open() {
        let grid = TimetableGrid::new(&small_calendar());
        assert_eq!(grid.open_count(), 6);
        assert!(grid.is_open(0, 0));
        assert!(grid.is_open(1, 2));
    }

    #[test]
    fn test_occupy() {
        let mut grid = TimetableGrid::new(&small_calendar());
        grid.occupy(0, 1);
        assert!(!grid.is_open(0, 1));
        assert!(grid.is_open(0, 0));
        assert_eq!(grid.open_count(), 5);
    }

    #[test]
    fn test_open_cells_day_major_order() {
        let mut grid = TimetableGrid::new(&small_calendar());
        grid.occupy(0, 0);
        let cells = grid.open_cells();
        assert_eq!(cells, vec![(0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_from_entries() {
        let calendar = small_calendar();
        let subject = Subject::core("CS101").with_instructor("I1");
        let room = Room::classroom("R1");
        let slot = TimeSlot::teaching(hm(10, 0), hm(11, 0));
        let entry = ScheduleEntry::new(&subject, &room, Day::Tuesday, &slot);

        let grid = TimetableGrid::from_entries(&calendar, &[entry]);
        assert!(!grid.is_open(1, 1)); // Tuesday, 10:00
        assert_eq!(grid.open_count(), 5);
    }

    #[test]
    fn test_from_entries_offset_entry_blocks_overlapped_cell() {
        let calendar = small_calendar();
        let subject = Subject::core("CS101").with_instructor("I1");
        let room = Room::classroom("R1");
        // 10:15-11:15 matches no slot start but overlaps the 10:00 slot
        let slot = TimeSlot::teaching(hm(10, 15), hm(11, 15));
        let entry = ScheduleEntry::new(&subject, &room, Day::Monday, &slot);

        let grid = TimetableGrid::from_entries(&calendar, &[entry]);
        assert!(!grid.is_open(0, 1)); // Monday, 10:00
        assert!(grid.is_open(0, 0));
        assert!(grid.is_open(0, 2)); // 11:15 slot starts as the entry ends
        assert_eq!(grid.open_count(), 5);
    }

    #[test]
    fn test_from_entries_ignores_foreign_cells() {
        // Entry on a day outside the calendar leaves the grid untouched
        let calendar = small_calendar();
        let subject = Subject::core("CS101");
        let room = Room::classroom("R1");
        let slot = TimeSlot::teaching(hm(9, 0), hm(10, 0));
        let entry = ScheduleEntry::new(&subject, &room, Day::Friday, &slot);

        let grid = TimetableGrid::from_entries(&calendar, &[entry]);
        assert_eq!(grid.open_count(), 6);
    }
}
