//! Canonical test configurations.

use crate::infrastructure::config::api::HttpConfig;
use crate::infrastructure::config::settings::Config;

/// HTTP settings with no retries or waits.
pub fn fast_http() -> HttpConfig {
    HttpConfig {
        timeout_ms: 500,
        connect_timeout_ms: 200,
        retry_max_attempts: 1,
        retry_backoff_ms: 0,
        ..HttpConfig::default()
    }
}

/// Config whose upstreams all point at a closed local port.
pub fn offline() -> Config {
    let mut config = Config::default();
    config.http = fast_http();
    let unreachable = "http://127.0.0.1:9".to_string();
    config.api.alquran_url = unreachable.clone();
    config.api.quran_com_url = unreachable.clone();
    config.api.aladhan_url = unreachable.clone();
    config.api.nominatim_url = unreachable.clone();
    config.api.audio_url = unreachable;
    config
}
