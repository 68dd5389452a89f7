//! Timetabling domain models.
//!
//! Core data types for representing a department's weekly timetabling
//! problem and its solution: the daily slot template, the working
//! calendar, subjects with weekly hour requirements, rooms, instructors,
//! and the committed schedule entries with their conflicts.
//!
//! # Time Model
//! All clock times are minutes since midnight on the slot's day.
//! Slots are half-open intervals `[start, end)`.

mod calendar;
mod constraints;
mod entry;
mod instructor;
mod room;
mod subject;
mod time;

pub use calendar::{available_slots, working_days, Day, WorkingCalendar};
pub use constraints::GenerationConstraints;
pub use entry::{Conflict, ConflictKind, ScheduleEntry, SessionKind, Shortfall, Timetable};
pub use instructor::Instructor;
pub use room::{Room, RoomType};
pub use subject::{Subject, SubjectType};
pub use time::{daily_template, fmt_min, hm, BreakKind, TimeSlot};
