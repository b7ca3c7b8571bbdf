//! Web layer for the departures service.
//!
//! Provides JSON endpoints that hand the next departures to a display
//! client.

mod board;
mod dto;
mod refresh;
mod routes;
mod state;

pub use board::{departures_board, journeys_board};
pub use dto::*;
pub use refresh::{Boards, refresh_boards, spawn_refresh};
pub use routes::{AppError, create_router};
pub use state::AppState;
