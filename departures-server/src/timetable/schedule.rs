//! Validated timetable, built once at startup and read-only afterwards.

use std::collections::BTreeMap;

use crate::domain::{ClockTime, Journey};

use super::error::TimetableError;
use super::types::{DayTimetableDto, JourneyDto, TimetableDto};

/// Field names used in error locations.
const DEPARTURES_FIELD: &str = "from_m3_departures";
const JOURNEY_DEPART_FIELD: &str = "to_m3_from_dublin.depart";
const JOURNEY_ARRIVE_FIELD: &str = "to_m3_from_dublin.arrive_m3";

/// Schedule for a single day-type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DaySchedule {
    /// Bare departure times, in document order.
    pub departures: Vec<ClockTime>,

    /// Journey records, in document order.
    pub journeys: Vec<Journey>,
}

/// A timetable: one schedule per day-type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    days: BTreeMap<String, DaySchedule>,
}

impl Timetable {
    /// Parse and validate a timetable document.
    ///
    /// Fails on the first malformed time, naming where it was found.
    pub fn from_json(json: &str) -> Result<Self, TimetableError> {
        let dto: TimetableDto = serde_json::from_str(json).map_err(|e| TimetableError::Json {
            message: e.to_string(),
        })?;
        Self::from_dto(dto)
    }

    /// Validate a deserialized document.
    pub fn from_dto(dto: TimetableDto) -> Result<Self, TimetableError> {
        let days = dto
            .into_iter()
            .map(|(day, entry)| {
                let schedule = convert_day(&day, entry)?;
                Ok((day, schedule))
            })
            .collect::<Result<BTreeMap<_, _>, TimetableError>>()?;

        Ok(Self { days })
    }

    /// Look up the schedule for a day-type.
    pub fn day(&self, day: &str) -> Option<&DaySchedule> {
        self.days.get(day)
    }

    /// Day-types present in the timetable, in name order.
    pub fn day_types(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    /// Number of day-types.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Check if the timetable has no day-types at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Convert one day-type's DTO, parsing every time.
fn convert_day(day: &str, dto: DayTimetableDto) -> Result<DaySchedule, TimetableError> {
    let departures = dto
        .from_m3_departures
        .iter()
        .enumerate()
        .map(|(index, s)| parse_at(s, day, DEPARTURES_FIELD, index))
        .collect::<Result<Vec<_>, _>>()?;

    let journeys = dto
        .to_m3_from_dublin
        .into_iter()
        .enumerate()
        .map(|(index, j)| convert_journey(j, day, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DaySchedule {
        departures,
        journeys,
    })
}

fn convert_journey(dto: JourneyDto, day: &str, index: usize) -> Result<Journey, TimetableError> {
    let depart = parse_at(&dto.depart, day, JOURNEY_DEPART_FIELD, index)?;
    let arrive = parse_at(&dto.arrive_m3, day, JOURNEY_ARRIVE_FIELD, index)?;

    Ok(Journey {
        origin: dto.origin,
        depart,
        arrive,
        via: dto.via,
    })
}

/// Parse a time, attaching its location in the document on failure.
fn parse_at(
    s: &str,
    day: &str,
    field: &'static str,
    index: usize,
) -> Result<ClockTime, TimetableError> {
    ClockTime::parse_hhmm(s).map_err(|source| TimetableError::InvalidTime {
        day: day.to_string(),
        field,
        index,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parses_document() {
        let json = r#"{
            "weekday": {
                "from_m3_departures": ["17:45", "07:10"],
                "to_m3_from_dublin": [
                    {"origin": "Docklands", "depart": "17:04", "arrive_m3": "17:49", "via": "Clonsilla"}
                ]
            }
        }"#;

        let timetable = Timetable::from_json(json).unwrap();
        let weekday = timetable.day("weekday").unwrap();

        // Document order is kept
        assert_eq!(weekday.departures, vec![t("17:45"), t("07:10")]);
        assert_eq!(
            weekday.journeys,
            vec![Journey::new("Docklands", t("17:04"), t("17:49"), "Clonsilla")]
        );
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let timetable = Timetable::from_json(r#"{"sunday": {}}"#).unwrap();
        let sunday = timetable.day("sunday").unwrap();

        assert!(sunday.departures.is_empty());
        assert!(sunday.journeys.is_empty());
    }

    #[test]
    fn accepts_plain_arrive_field() {
        let json = r#"{"weekday": {"to_m3_from_dublin": [
            {"origin": "Connolly", "depart": "08:00", "arrive": "08:45", "via": "Clonsilla"}
        ]}}"#;

        let timetable = Timetable::from_json(json).unwrap();
        assert_eq!(timetable.day("weekday").unwrap().journeys[0].arrive, t("08:45"));
    }

    #[test]
    fn day_lookup_and_listing() {
        let timetable =
            Timetable::from_json(r#"{"weekday": {}, "saturday": {}, "sunday": {}}"#).unwrap();

        assert_eq!(timetable.len(), 3);
        assert!(!timetable.is_empty());
        assert_eq!(
            timetable.day_types().collect::<Vec<_>>(),
            ["saturday", "sunday", "weekday"]
        );
        assert!(timetable.day("holiday").is_none());
    }

    #[test]
    fn malformed_departure_fails_fast() {
        let json = r#"{"weekday": {"from_m3_departures": ["07:10", "8.00"]}}"#;

        let err = Timetable::from_json(json).unwrap_err();
        match err {
            TimetableError::InvalidTime {
                day, field, index, ..
            } => {
                assert_eq!(day, "weekday");
                assert_eq!(field, DEPARTURES_FIELD);
                assert_eq!(index, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_journey_arrival_fails_fast() {
        let json = r#"{"weekday": {"to_m3_from_dublin": [
            {"origin": "Connolly", "depart": "08:00", "arrive_m3": "25:10", "via": "Clonsilla"}
        ]}}"#;

        let err = Timetable::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            TimetableError::InvalidTime {
                field: JOURNEY_ARRIVE_FIELD,
                index: 0,
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            Timetable::from_json("{not json"),
            Err(TimetableError::Json { .. })
        ));
        assert!(matches!(
            Timetable::from_json(r#"{"weekday": {"from_m3_departures": [710]}}"#),
            Err(TimetableError::Json { .. })
        ));
    }

    #[test]
    fn bundled_timetable_is_valid() {
        let timetable = Timetable::from_json(include_str!("../../data/timetable.json")).unwrap();
        let weekday = timetable.day("weekday").unwrap();

        assert!(weekday.departures.len() >= 3);
        assert!(weekday.journeys.len() >= 3);
    }
}
