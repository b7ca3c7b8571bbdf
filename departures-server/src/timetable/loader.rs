//! One-shot timetable loading from a local file or an HTTP URL.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info};

use super::error::TimetableError;
use super::schedule::Timetable;

/// Default request timeout for URL sources, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the timetable document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableSource {
    /// A local JSON file.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
}

impl TimetableSource {
    /// Interpret a string as a source: `http://` and `https://` prefixes mean
    /// a URL, anything else is a file path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            Self::Url(s.to_string())
        } else {
            Self::File(PathBuf::from(s))
        }
    }
}

impl fmt::Display for TimetableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableSource::File(path) => write!(f, "{}", path.display()),
            TimetableSource::Url(url) => f.write_str(url),
        }
    }
}

/// Loads and validates the timetable.
#[derive(Debug, Clone)]
pub struct TimetableLoader {
    source: TimetableSource,
    timeout: Duration,
}

impl TimetableLoader {
    /// Create a loader for the given source with the default timeout.
    pub fn new(source: TimetableSource) -> Self {
        Self {
            source,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The source this loader reads from.
    pub fn source(&self) -> &TimetableSource {
        &self.source
    }

    /// Fetch and validate the timetable.
    ///
    /// There is no retry: any failure is returned to the caller as-is.
    pub async fn load(&self) -> Result<Timetable, TimetableError> {
        let body = match &self.source {
            TimetableSource::File(path) => read_file(path).await?,
            TimetableSource::Url(url) => fetch_url(url, self.timeout).await?,
        };
        debug!(source = %self.source, bytes = body.len(), "timetable document read");

        let timetable = Timetable::from_json(&body)?;
        info!(
            source = %self.source,
            day_types = timetable.len(),
            "timetable loaded"
        );

        Ok(timetable)
    }
}

async fn read_file(path: &Path) -> Result<String, TimetableError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn fetch_url(url: &str, timeout: Duration) -> Result<String, TimetableError> {
    let http = reqwest::Client::builder().timeout(timeout).build()?;

    let response = http.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TimetableError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}
