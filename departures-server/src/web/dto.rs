//! Data transfer objects for web requests and responses.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::clock::{now_stamp, time_of_day};
use crate::domain::Journey;

/// Query for a departures or journeys board.
#[derive(Debug, Default, Deserialize)]
pub struct BoardRequest {
    /// Day-type to read (defaults to the configured one)
    pub day: Option<String>,

    /// Time in HH:MM format (defaults to now)
    pub at: Option<String>,
}

/// The current moment, as the board saw it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowResult {
    /// IANA timezone name
    pub timezone: String,

    /// Time of day in HH:MM format
    pub time: String,

    /// Human-readable date and time
    pub stamp: String,
}

impl NowResult {
    pub fn from_instant(now: &DateTime<Tz>) -> Self {
        Self {
            timezone: now.timezone().name().to_string(),
            time: time_of_day(now).to_string(),
            stamp: now_stamp(now),
        }
    }
}

/// Next departures for a day-type.
#[derive(Debug, Clone, Serialize)]
pub struct DeparturesResponse {
    /// Day-type the board was read from
    pub day: String,

    /// When the board was computed
    pub now: NowResult,

    /// Time of day the selection was made for, in HH:MM format
    pub at: String,

    /// Seconds until the board should be fetched again
    pub refresh_secs: u64,

    /// Departure times in HH:MM format, soonest first
    pub departures: Vec<String>,
}

/// A journey on a board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyResult {
    /// Origin station
    pub origin: String,

    /// Departure time in HH:MM format
    pub depart: String,

    /// Arrival time in HH:MM format
    pub arrive: String,

    /// Change station
    pub via: String,
}

impl JourneyResult {
    pub fn from_journey(journey: &Journey) -> Self {
        Self {
            origin: journey.origin.clone(),
            depart: journey.depart.to_string(),
            arrive: journey.arrive.to_string(),
            via: journey.via.clone(),
        }
    }
}

/// Next journeys for a day-type.
#[derive(Debug, Clone, Serialize)]
pub struct JourneysResponse {
    /// Day-type the board was read from
    pub day: String,

    /// When the board was computed
    pub now: NowResult,

    /// Time of day the selection was made for, in HH:MM format
    pub at: String,

    /// Seconds until the board should be fetched again
    pub refresh_secs: u64,

    /// Journeys, soonest departure first
    pub journeys: Vec<JourneyResult>,
}

/// Day-types available in the timetable.
#[derive(Debug, Serialize)]
pub struct DayTypesResponse {
    /// Day-type used when a request names none
    pub default_day: String,

    /// All day-types, in name order
    pub days: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;
    use chrono::TimeZone;
    use chrono_tz::Europe::Dublin;

    #[test]
    fn now_result_fields() {
        let now = Dublin.with_ymd_and_hms(2024, 7, 1, 8, 5, 0).unwrap();

        let result = NowResult::from_instant(&now);

        assert_eq!(result.timezone, "Europe/Dublin");
        assert_eq!(result.time, "08:05");
        assert_eq!(result.stamp, "Mon 01 Jul 2024, 08:05 (Europe/Dublin)");
    }

    #[test]
    fn journey_result_from_journey() {
        let journey = Journey::new(
            "Docklands",
            ClockTime::parse_hhmm("7:05").unwrap(),
            ClockTime::parse_hhmm("07:44").unwrap(),
            "Clonsilla",
        );

        let result = JourneyResult::from_journey(&journey);

        assert_eq!(
            result,
            JourneyResult {
                origin: "Docklands".into(),
                depart: "07:05".into(),
                arrive: "07:44".into(),
                via: "Clonsilla".into(),
            }
        );
    }

    #[test]
    fn board_request_fields_are_optional() {
        let req: BoardRequest = serde_json::from_str("{}").unwrap();
        assert!(req.day.is_none());
        assert!(req.at.is_none());

        let req: BoardRequest =
            serde_json::from_str(r#"{"day": "saturday", "at": "07:30"}"#).unwrap();
        assert_eq!(req.day.as_deref(), Some("saturday"));
        assert_eq!(req.at.as_deref(), Some("07:30"));
    }
}
