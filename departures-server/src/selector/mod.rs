//! Departure selection.
//!
//! Answers "what are the next few departures from now?" for a daily
//! timetable. Selection is pure: the caller supplies both the schedule and
//! the current time of day, already projected into the timetable's timezone.

mod select;

pub use select::{BOARD_SIZE, Departs, next_departures, next_three};
