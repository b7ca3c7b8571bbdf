//! Board assembly: run selection for one moment and shape the result.
//!
//! Shared by the HTTP handlers and the periodic refresh task so both see the
//! same board for the same instant.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::clock::time_of_day;
use crate::domain::ClockTime;
use crate::selector::next_three;
use crate::timetable::Timetable;

use super::dto::{DeparturesResponse, JourneyResult, JourneysResponse, NowResult};

/// Next three bare departures for `day`, selected at `at` (or the time of
/// day of `now` when not given).
///
/// Returns `None` if the timetable has no such day-type.
pub fn departures_board(
    timetable: &Timetable,
    day: &str,
    now: &DateTime<Tz>,
    at: Option<ClockTime>,
    refresh_secs: u64,
) -> Option<DeparturesResponse> {
    let schedule = timetable.day(day)?;
    let at = at.unwrap_or_else(|| time_of_day(now));

    let departures = next_three(&schedule.departures, at)
        .into_iter()
        .map(ToString::to_string)
        .collect();

    Some(DeparturesResponse {
        day: day.to_string(),
        now: NowResult::from_instant(now),
        at: at.to_string(),
        refresh_secs,
        departures,
    })
}

/// Next three journeys for `day`, ordered by departure and selected at `at`
/// (or the time of day of `now` when not given).
///
/// Returns `None` if the timetable has no such day-type.
pub fn journeys_board(
    timetable: &Timetable,
    day: &str,
    now: &DateTime<Tz>,
    at: Option<ClockTime>,
    refresh_secs: u64,
) -> Option<JourneysResponse> {
    let schedule = timetable.day(day)?;
    let at = at.unwrap_or_else(|| time_of_day(now));

    let journeys = next_three(&schedule.journeys, at)
        .into_iter()
        .map(JourneyResult::from_journey)
        .collect();

    Some(JourneysResponse {
        day: day.to_string(),
        now: NowResult::from_instant(now),
        at: at.to_string(),
        refresh_secs,
        journeys,
    })
}
