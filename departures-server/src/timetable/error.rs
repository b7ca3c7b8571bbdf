//! Timetable loading error types.

use std::path::PathBuf;

use crate::domain::TimeError;

/// Errors that can occur when loading or validating a timetable.
#[derive(Debug, thiserror::Error)]
pub enum TimetableError {
    /// Reading a local timetable file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Document is not valid timetable JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A departure or arrival time could not be parsed
    #[error("invalid time in {day}.{field}[{index}]: {source}")]
    InvalidTime {
        day: String,
        field: &'static str,
        index: usize,
        source: TimeError,
    },
}
