//! Journey records: a departure plus the details shown alongside it.

use super::ClockTime;

/// A scheduled journey with a change along the way.
///
/// Only `depart` takes part in selection. The remaining fields are carried
/// through untouched for the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Station the journey starts from.
    pub origin: String,

    /// Departure time from `origin`.
    pub depart: ClockTime,

    /// Arrival time at the journey's destination.
    pub arrive: ClockTime,

    /// Station where the passenger changes.
    pub via: String,
}

impl Journey {
    /// Create a new journey record.
    pub fn new(
        origin: impl Into<String>,
        depart: ClockTime,
        arrive: ClockTime,
        via: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            depart,
            arrive,
            via: via.into(),
        }
    }
}
