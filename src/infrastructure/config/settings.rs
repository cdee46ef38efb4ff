//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for the location (`MISHKAT_LATITUDE` / `MISHKAT_LONGITUDE`).
//!
//! # Example
//!
//! ```no_run
//! use mishkat::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(None);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use super::api::{ApiConfig, HttpConfig};
use super::logging::LoggingConfig;
use super::service::{AudioConfig, LocationConfig, StorageConfig};
use crate::domain::{Coordinates, Reciter};
use crate::error::{ConfigError, Result};

pub const LATITUDE_ENV: &str = "MISHKAT_LATITUDE";
pub const LONGITUDE_ENV: &str = "MISHKAT_LONGITUDE";

/// Main application configuration.
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Upstream API endpoints and query defaults.
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP timeouts and retry policy.
    #[serde(default)]
    pub http: HttpConfig,

    /// Fixed location for prayer times.
    #[serde(default)]
    pub location: LocationConfig,

    /// Recitation defaults.
    #[serde(default)]
    pub audio: AudioConfig,

    /// Local storage location.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an environment
    /// override does not parse, or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Config::parse_toml`]
    /// fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load a config file if it exists, otherwise start from the defaults.
    ///
    /// Environment overrides and validation apply either way.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Self::parse_toml("")
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(latitude) = read_env_f64(LATITUDE_ENV, "latitude")? {
            self.location.latitude = Some(latitude);
        }
        if let Some(longitude) = read_env_f64(LONGITUDE_ENV, "longitude")? {
            self.location.longitude = Some(longitude);
        }
        Ok(())
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        for (field, value) in self.api.endpoints() {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
            Url::parse(value).map_err(|e| ConfigError::InvalidValue {
                field,
                reason: e.to_string(),
            })?;
        }
        if self.api.quran_edition.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "quran_edition",
            }
            .into());
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if Reciter::find(self.audio.default_reciter).is_none() {
            return Err(ConfigError::InvalidValue {
                field: "default_reciter",
                reason: format!("no reciter with id {}", self.audio.default_reciter),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        self.coordinates()?;
        Ok(())
    }

    /// The configured location, if any.
    ///
    /// # Errors
    ///
    /// Fails when only one coordinate is set or the pair is out of range.
    pub fn coordinates(&self) -> Result<Option<Coordinates>> {
        match (self.location.latitude, self.location.longitude) {
            (None, None) => Ok(None),
            (Some(latitude), Some(longitude)) => {
                let coordinates =
                    Coordinates::new(latitude, longitude).map_err(|e| ConfigError::InvalidValue {
                        field: "location",
                        reason: e.to_string(),
                    })?;
                Ok(Some(coordinates))
            }
            (None, Some(_)) => Err(ConfigError::MissingField { field: "latitude" }.into()),
            (Some(_), None) => Err(ConfigError::MissingField { field: "longitude" }.into()),
        }
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self, level_override: Option<&str>) {
        self.logging.init(level_override);
    }
}

fn read_env_f64(var: &str, field: &'static str) -> Result<Option<f64>> {
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::InvalidValue {
                    field,
                    reason: format!("{var}: {e}"),
                })?;
            Ok(Some(value))
        }
        _ => Ok(None),
    }
}
