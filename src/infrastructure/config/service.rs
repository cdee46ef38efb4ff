//! Service configuration for location, audio and local storage.

use serde::{Deserialize, Serialize};

/// Fixed location used instead of device geolocation.
///
/// Both coordinates must be set together.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Recitation playback defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AudioConfig {
    /// Reciter id used when `--reciter` is not given.
    #[serde(default = "default_reciter")]
    pub default_reciter: u32,
}

const fn default_reciter() -> u32 {
    1
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            default_reciter: default_reciter(),
        }
    }
}

/// Local storage for favorites, notes and the tasbih counter.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the JSON storage file. Defaults to `~/.mishkat/storage.json`.
    #[serde(default)]
    pub path: Option<String>,
}
