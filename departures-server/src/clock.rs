//! Wall-clock access and civil timezone projection.
//!
//! Selection works on a bare time of day, so "now" has to be projected into
//! the timetable's own timezone first, independent of the host's local
//! timezone and following daylight saving.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::domain::ClockTime;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant (for tests and replays).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Create a clock that always reports `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that reads the time in one fixed civil timezone.
#[derive(Clone)]
pub struct CivilClock {
    source: Arc<dyn Clock>,
    tz: Tz,
}

impl CivilClock {
    /// Create a civil clock over an arbitrary instant source.
    pub fn new(source: Arc<dyn Clock>, tz: Tz) -> Self {
        Self { source, tz }
    }

    /// Create a civil clock over the system time.
    pub fn system(tz: Tz) -> Self {
        Self::new(Arc::new(SystemClock), tz)
    }

    /// The timezone this clock reports in.
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The current instant, in this clock's timezone.
    pub fn now(&self) -> DateTime<Tz> {
        self.source.now_utc().with_timezone(&self.tz)
    }

    /// The current time of day, in this clock's timezone.
    pub fn time_of_day(&self) -> ClockTime {
        time_of_day(&self.now())
    }
}

/// Wall-clock time of day of an instant already projected into its timezone.
pub fn time_of_day(now: &DateTime<Tz>) -> ClockTime {
    ClockTime::from_naive_time(now.time())
}

/// Human-readable stamp for "now", e.g. `Mon 19 Oct 2026, 17:05 (Europe/Dublin)`.
pub fn now_stamp(now: &DateTime<Tz>) -> String {
    format!(
        "{} ({})",
        now.format("%a %d %b %Y, %H:%M"),
        now.timezone().name()
    )
}
