//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::ClockTime;

use super::board::{departures_board, journeys_board};
use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/now", get(now))
        .route("/days", get(day_types))
        .route("/departures", get(departures))
        .route("/journeys", get(journeys))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Current time in the timetable's timezone.
async fn now(State(state): State<AppState>) -> Json<NowResult> {
    Json(NowResult::from_instant(&state.clock.now()))
}

/// List the day-types the timetable covers.
async fn day_types(State(state): State<AppState>) -> Json<DayTypesResponse> {
    Json(DayTypesResponse {
        default_day: state.config.default_day.clone(),
        days: state.timetable.day_types().map(str::to_string).collect(),
    })
}

/// Next three bare departures.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let day = requested_day(&state, &req);
    let at = requested_time(&req)?;
    let now = state.clock.now();

    let board = departures_board(&state.timetable, day, &now, at, state.config.refresh_secs)
        .ok_or_else(|| unknown_day(day))?;
    debug!(day, departures = ?board.departures, "departures board");

    Ok(Json(board))
}

/// Next three journeys.
async fn journeys(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<JourneysResponse>, AppError> {
    let day = requested_day(&state, &req);
    let at = requested_time(&req)?;
    let now = state.clock.now();

    let board = journeys_board(&state.timetable, day, &now, at, state.config.refresh_secs)
        .ok_or_else(|| unknown_day(day))?;
    debug!(day, journeys = board.journeys.len(), "journeys board");

    Ok(Json(board))
}

/// The day-type named in the request, or the configured default.
fn requested_day<'a>(state: &'a AppState, req: &'a BoardRequest) -> &'a str {
    req.day
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(state.config.default_day.as_str())
}

/// The time of day named in the request, if any.
fn requested_time(req: &BoardRequest) -> Result<Option<ClockTime>, AppError> {
    req.at
        .as_deref()
        .map(|at| {
            ClockTime::parse_hhmm(at.trim()).map_err(|e| AppError::BadRequest {
                message: format!("Invalid time {at:?}: {e}"),
            })
        })
        .transpose()
}

fn unknown_day(day: &str) -> AppError {
    AppError::NotFound {
        message: format!("No timetable for day type: {day}"),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
