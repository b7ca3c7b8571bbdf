//! Periodic board refresh.
//!
//! Recomputes the default day's boards on the configured interval so the
//! selection follows the clock between requests.

use tokio::task::JoinHandle;
use tracing::debug;

use super::board::{departures_board, journeys_board};
use super::dto::{DeparturesResponse, JourneysResponse};
use super::state::AppState;

/// Both boards for one day-type, computed at the same instant.
#[derive(Debug, Clone)]
pub struct Boards {
    pub departures: DeparturesResponse,
    pub journeys: JourneysResponse,
}

/// Compute both boards for the configured default day at the clock's
/// current time.
///
/// Returns `None` if the timetable has no such day-type.
pub fn refresh_boards(state: &AppState) -> Option<Boards> {
    let now = state.clock.now();
    let day = state.config.default_day.as_str();
    let refresh_secs = state.config.refresh_secs;

    Some(Boards {
        departures: departures_board(&state.timetable, day, &now, None, refresh_secs)?,
        journeys: journeys_board(&state.timetable, day, &now, None, refresh_secs)?,
    })
}

/// Recompute the boards on every refresh tick and hand them to `on_refresh`.
///
/// The first tick fires immediately. Ticks where the default day-type is
/// missing are skipped.
pub fn spawn_refresh<F>(state: AppState, mut on_refresh: F) -> JoinHandle<()>
where
    F: FnMut(Boards) + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(state.config.refresh_interval());
        loop {
            interval.tick().await;

            match refresh_boards(&state) {
                Some(boards) => on_refresh(boards),
                None => debug!(day = %state.config.default_day, "no timetable to refresh"),
            }
        }
    })
}
