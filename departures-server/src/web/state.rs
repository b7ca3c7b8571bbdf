//! Application state for the web layer.

use std::sync::Arc;

use crate::clock::CivilClock;
use crate::config::BoardConfig;
use crate::timetable::Timetable;

/// Shared application state.
///
/// Everything here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
    /// Timetable loaded at startup
    pub timetable: Arc<Timetable>,

    /// Clock in the timetable's timezone
    pub clock: Arc<CivilClock>,

    /// Service configuration
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: Timetable, clock: CivilClock, config: BoardConfig) -> Self {
        Self {
            timetable: Arc::new(timetable),
            clock: Arc::new(clock),
            config: Arc::new(config),
        }
    }
}
