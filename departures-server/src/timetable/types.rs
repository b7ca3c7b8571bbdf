//! Wire format of the timetable document.
//!
//! The document is a JSON object keyed by day-type:
//!
//! ```json
//! {
//!   "weekday": {
//!     "from_m3_departures": ["06:15", "07:10"],
//!     "to_m3_from_dublin": [
//!       { "origin": "Connolly", "depart": "16:50", "arrive_m3": "17:35", "via": "Clonsilla" }
//!     ]
//!   }
//! }
//! ```
//!
//! Times stay as strings here; `schedule` validates them.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Whole document: day-type name → that day's timetable.
pub type TimetableDto = BTreeMap<String, DayTimetableDto>;

/// One day-type's timetable, as written in the document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayTimetableDto {
    /// Departures from M3 Parkway towards Dublin.
    #[serde(default)]
    pub from_m3_departures: Vec<String>,

    /// Journeys from Dublin to M3 Parkway, with a change.
    #[serde(default)]
    pub to_m3_from_dublin: Vec<JourneyDto>,
}

/// A journey record as written in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyDto {
    pub origin: String,
    pub depart: String,
    #[serde(alias = "arrive")]
    pub arrive_m3: String,
    pub via: String,
}
