//! Domain types for the departures service.
//!
//! These types represent validated timetable data. Invariants are enforced
//! at construction time, so code that receives them can trust their validity.

mod journey;
mod time;

pub use journey::Journey;
pub use time::{ClockTime, MINUTES_PER_DAY, TimeError};
