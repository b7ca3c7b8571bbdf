use std::process::ExitCode;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use departures_server::clock::CivilClock;
use departures_server::config::BoardConfig;
use departures_server::web::{AppState, Boards, create_router, spawn_refresh};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "departures service failed");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with `RUST_LOG` filtering, defaulting to `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardConfig::from_env()?;

    // Load the timetable once; nothing is served until this succeeds
    info!(source = %config.source, timezone = config.timezone.name(), "loading timetable");
    let timetable = config.loader().load().await?;

    if timetable.day(&config.default_day).is_none() {
        warn!(
            day = %config.default_day,
            "default day type missing from timetable; requests without ?day= will 404"
        );
    }

    let clock = CivilClock::system(config.timezone);
    let state = AppState::new(timetable, clock, config.clone());

    spawn_refresh(state.clone(), log_boards);

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "departures service listening");
    info!("  GET  /health      - Health check");
    info!("  GET  /now         - Current time in the timetable's timezone");
    info!("  GET  /days        - Day types in the timetable");
    info!("  GET  /departures  - Next three departures (?day=, ?at=HH:MM)");
    info!("  GET  /journeys    - Next three journeys (?day=, ?at=HH:MM)");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Refreshed boards are only logged; clients poll the HTTP endpoints.
fn log_boards(boards: Boards) {
    let Boards {
        departures,
        journeys,
    } = boards;

    debug!(
        day = %departures.day,
        at = %departures.at,
        departures = ?departures.departures,
        "departures refreshed"
    );

    let departs: Vec<&str> = journeys.journeys.iter().map(|j| j.depart.as_str()).collect();
    debug!(day = %journeys.day, at = %journeys.at, journeys = ?departs, "journeys refreshed");
}
