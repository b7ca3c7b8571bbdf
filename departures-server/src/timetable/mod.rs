//! Timetable document loading and validation.
//!
//! The timetable is read once at startup, from a file or a URL, validated
//! into typed schedules, and shared read-only from then on.

mod error;
mod loader;
mod schedule;
mod types;

pub use error::TimetableError;
pub use loader::{DEFAULT_TIMEOUT_SECS, TimetableLoader, TimetableSource};
pub use schedule::{DaySchedule, Timetable};
pub use types::{DayTimetableDto, JourneyDto, TimetableDto};
