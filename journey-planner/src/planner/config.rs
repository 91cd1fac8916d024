//! Planner configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::Mode;

/// Default URL for journey planning.
pub const DEFAULT_JOURNEY_URL: &str = "https://api.tfl.gov.uk/Journey/JourneyResults";

/// Default URL for station name search.
pub const DEFAULT_STOP_POINT_URL: &str = "https://api.tfl.gov.uk/StopPoint/Search";

/// Settings file read from the working directory when no path is given.
pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

/// Errors loading a settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid settings JSON
    #[error("invalid settings file {path}: {message}")]
    Json { path: PathBuf, message: String },
}

/// Configuration shared by the resolver and the journey query.
///
/// Every field has a default, so a settings file only needs the fields
/// it wants to change:
///
/// ```json
/// { "app_key": "0123456789abcdef" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    /// TfL application key
    #[serde(default)]
    pub app_key: String,
    /// Base URL for `{base}/{from}/to/{to}` journey requests
    #[serde(default = "default_journey_url")]
    pub journey_url: String,
    /// URL for station name search
    #[serde(default = "default_stop_point_url")]
    pub stop_point_url: String,
    /// The one mode searches and journeys are restricted to
    #[serde(default)]
    pub mode: Mode,
}

fn default_journey_url() -> String {
    DEFAULT_JOURNEY_URL.to_string()
}

fn default_stop_point_url() -> String {
    DEFAULT_STOP_POINT_URL.to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl PlannerConfig {
    /// Create a config with the given app key and production defaults.
    pub fn new(app_key: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            journey_url: default_journey_url(),
            stop_point_url: default_stop_point_url(),
            mode: Mode::default(),
        }
    }

    /// Set a custom journey URL (for testing).
    pub fn with_journey_url(mut self, url: impl Into<String>) -> Self {
        self.journey_url = url.into();
        self
    }

    /// Set a custom stop point search URL (for testing).
    pub fn with_stop_point_url(mut self, url: impl Into<String>) -> Self {
        self.stop_point_url = url.into();
        self
    }

    /// Set the transport mode.
    pub fn with_mode(mut self, mode: impl Into<Mode>) -> Self {
        self.mode = mode.into();
        self
    }

    /// Load from a JSON settings file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|e| ConfigError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load settings from `path`, or from [`DEFAULT_SETTINGS_FILE`] if it
    /// exists, or fall back to defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_SETTINGS_FILE).is_file() => {
                Self::from_file(DEFAULT_SETTINGS_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// `{journey_url}/{from}/to/{to}`
    pub fn journey_endpoint(&self, from: &str, to: &str) -> String {
        format!("{}/{from}/to/{to}", self.journey_url.trim_end_matches('/'))
    }
}
