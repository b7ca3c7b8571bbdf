//! Time-of-day handling for daily timetables.
//!
//! Timetables list departures as "HH:MM" strings with no date attached: the
//! same list applies every day of its day-type. This module provides a
//! validated time-of-day that compares by minutes since midnight.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Error returned when parsing or constructing an invalid time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day, with minute precision and no date.
///
/// Stored as minutes since midnight, so ordering is plain integer ordering
/// and `00:10` sorts before `23:50`.
///
/// # Examples
///
/// ```
/// use departures_server::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("17:45").unwrap();
/// assert_eq!(t.minutes_since_midnight(), 17 * 60 + 45);
/// assert_eq!(t.to_string(), "17:45");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Midnight, the first minute of the day.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// Create a time from hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Create a time from minutes since midnight (0-1439).
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::new("minutes since midnight must be 0-1439"));
        }
        Ok(Self { minutes })
    }

    /// Parse a time from "HH:MM" format. A single-digit hour ("7:05") is
    /// accepted; minutes must always have two digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use departures_server::domain::ClockTime;
    ///
    /// // Valid times
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    /// assert!(ClockTime::parse_hhmm("7:05").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("1430").is_err());
    /// assert!(ClockTime::parse_hhmm("14:3").is_err());
    /// assert!(ClockTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (hours, minutes) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new("expected HH:MM format"))?;

        if hours.is_empty() || hours.len() > 2 {
            return Err(TimeError::new("hour must have one or two digits"));
        }
        if minutes.len() != 2 {
            return Err(TimeError::new("minute must have two digits"));
        }

        let hour = parse_digits(hours).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute =
            parse_digits(minutes).ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Truncate a `NaiveTime` to its hour and minute.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    /// Returns the canonical comparison key, minutes since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u16 {
        self.minutes
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }
}

/// Parse a short run of ASCII digits into a u32.
fn parse_digits(s: &str) -> Option<u32> {
    s.chars()
        .try_fold(0u32, |acc, c| Some(acc * 10 + c.to_digit(10)?))
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}
