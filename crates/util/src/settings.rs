//! User settings for the navigation host.
//!
//! Settings live in a small JSON file (`~/.config/techevents/settings.json` on
//! most platforms, overridable through `TECHEVENTS_SETTINGS_PATH`). Every field
//! is optional in the file; missing fields take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use techevents_types::{ObserverOptions, TieBreak};
use thiserror::Error;
use tracing::{debug, warn};

use crate::app_file_path;

/// Environment variable overriding the settings file path.
pub const SETTINGS_PATH_ENV: &str = "TECHEVENTS_SETTINGS_PATH";

/// Environment variable overriding the log file path.
pub const LOG_PATH_ENV: &str = "TECHEVENTS_LOG_PATH";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const LOG_FILE_NAME: &str = "techevents.log";

/// Error surfaced when settings cannot be read or are out of range.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Tunables for scroll classification, section observation and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Offset (page units) past which the header is elevated.
    pub scroll_threshold: f64,
    /// Visible fraction a section needs to count as intersecting.
    pub intersection_threshold: f64,
    /// Rows trimmed from the top and bottom of the viewport before measuring.
    pub root_margin: f64,
    pub tie_break: TieBreak,
    /// Terminal width (columns) below which the mobile layout is used.
    pub mobile_breakpoint: u16,
    /// Preferred theme identifier.
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
            intersection_threshold: 0.5,
            root_margin: 0.0,
            tie_break: TieBreak::default(),
            mobile_breakpoint: 100,
            theme: None,
        }
    }
}

impl Settings {
    /// Loads settings from `explicit` when given, otherwise from the default path.
    ///
    /// An explicit path must exist and parse. The default path may be missing
    /// (defaults are used) or malformed (a warning is logged and defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let settings = match explicit {
            Some(path) => {
                let data = fs::read_to_string(path)?;
                serde_json::from_str(&data)?
            }
            None => load_lenient(&default_settings_path())?,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects values the navigation cannot work with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.scroll_threshold.is_finite() || self.scroll_threshold < 0.0 {
            return Err(invalid("scroll_threshold", "must be a finite, non-negative number"));
        }
        if !(self.intersection_threshold > 0.0 && self.intersection_threshold <= 1.0) {
            return Err(invalid("intersection_threshold", "must be in (0, 1]"));
        }
        if !self.root_margin.is_finite() || self.root_margin < 0.0 {
            return Err(invalid("root_margin", "must be a finite, non-negative number"));
        }
        Ok(())
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            root_margin: self.root_margin,
            threshold: self.intersection_threshold,
        }
    }
}

/// Settings path from `TECHEVENTS_SETTINGS_PATH` or the config directory.
pub fn default_settings_path() -> PathBuf {
    app_file_path(SETTINGS_PATH_ENV, SETTINGS_FILE_NAME)
}

/// Log file path from `TECHEVENTS_LOG_PATH` or the config directory.
pub fn default_log_path() -> PathBuf {
    app_file_path(LOG_PATH_ENV, LOG_FILE_NAME)
}

fn load_lenient(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => Ok(settings),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse settings file; using defaults"
                );
                Ok(Settings::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file; using defaults");
            Ok(Settings::default())
        }
        Err(error) => Err(SettingsError::Io(error)),
    }
}

fn invalid(field: &'static str, reason: &str) -> SettingsError {
    SettingsError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
