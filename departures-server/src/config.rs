//! Service configuration.
//!
//! Read from environment variables at startup, falling back to defaults
//! for anything unset.

use std::net::SocketAddr;
use std::time::Duration;

use chrono_tz::Tz;

use crate::timetable::{DEFAULT_TIMEOUT_SECS, TimetableLoader, TimetableSource};

/// Environment variable names.
pub const ENV_SOURCE: &str = "TIMETABLE_SOURCE";
pub const ENV_TIMEZONE: &str = "TIMETABLE_TZ";
pub const ENV_DAY: &str = "TIMETABLE_DAY";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_REFRESH_SECS: &str = "REFRESH_SECS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";

/// Timetable read when `TIMETABLE_SOURCE` is unset, relative to the working
/// directory. Matches the document bundled with the crate.
pub const DEFAULT_SOURCE: &str = "data/timetable.json";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

impl ConfigError {
    fn new(var: &'static str, message: impl Into<String>) -> Self {
        Self {
            var,
            message: message.into(),
        }
    }

    /// The environment variable that held the bad value.
    pub fn var(&self) -> &'static str {
        self.var
    }
}

/// Configuration for the departures service.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Where to load the timetable document from.
    pub source: TimetableSource,

    /// Timezone the timetable's times are written in.
    pub timezone: Tz,

    /// Day-type served when a request doesn't name one.
    pub default_day: String,

    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,

    /// How often displayed boards should be recomputed (seconds).
    pub refresh_secs: u64,

    /// Timeout for fetching a timetable over HTTP (seconds).
    pub http_timeout_secs: u64,
}

impl BoardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(source) = lookup(ENV_SOURCE) {
            if source.trim().is_empty() {
                return Err(ConfigError::new(ENV_SOURCE, "must not be empty"));
            }
            config.source = TimetableSource::parse(source.trim());
        }

        if let Some(tz) = lookup(ENV_TIMEZONE) {
            config.timezone = tz
                .trim()
                .parse::<Tz>()
                .map_err(|e| ConfigError::new(ENV_TIMEZONE, e.to_string()))?;
        }

        if let Some(day) = lookup(ENV_DAY) {
            if day.trim().is_empty() {
                return Err(ConfigError::new(ENV_DAY, "must not be empty"));
            }
            config.default_day = day.trim().to_string();
        }

        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|e: std::net::AddrParseError| {
                    ConfigError::new(ENV_BIND_ADDR, e.to_string())
                })?;
        }

        if let Some(secs) = lookup(ENV_REFRESH_SECS) {
            config.refresh_secs = parse_positive_secs(ENV_REFRESH_SECS, &secs)?;
        }

        if let Some(secs) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            config.http_timeout_secs = parse_positive_secs(ENV_HTTP_TIMEOUT_SECS, &secs)?;
        }

        Ok(config)
    }

    /// Returns the refresh period as a Duration.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_secs)
    }

    /// Returns the HTTP timeout as a Duration.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Build a loader for the configured timetable source.
    pub fn loader(&self) -> TimetableLoader {
        TimetableLoader::new(self.source.clone()).with_timeout(self.http_timeout())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            source: TimetableSource::parse(DEFAULT_SOURCE),
            timezone: chrono_tz::Europe::Dublin,
            default_day: "weekday".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            refresh_secs: 30,
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn parse_positive_secs(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(ConfigError::new(var, "must be at least 1 second")),
        Ok(secs) => Ok(secs),
        Err(e) => Err(ConfigError::new(var, e.to_string())),
    }
}
