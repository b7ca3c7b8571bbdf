//! Next-departures timetable service.
//!
//! Answers: "when are the next three trains?" for a daily timetable,
//! wrapping to tomorrow's first departures late in the evening.

pub mod clock;
pub mod config;
pub mod domain;
pub mod selector;
pub mod timetable;
pub mod web;
