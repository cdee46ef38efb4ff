//! Upstream API endpoints and HTTP client behaviour.

use serde::{Deserialize, Serialize};

/// Base URLs and query defaults for the third-party content APIs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Surah index and text (`api.alquran.cloud`).
    #[serde(default = "default_alquran_url")]
    pub alquran_url: String,
    /// Tafseer commentary (`api.quran.com`).
    #[serde(default = "default_quran_com_url")]
    pub quran_com_url: String,
    /// Prayer times by coordinates (`api.aladhan.com`).
    #[serde(default = "default_aladhan_url")]
    pub aladhan_url: String,
    /// Reverse geocoding (`nominatim.openstreetmap.org`).
    #[serde(default = "default_nominatim_url")]
    pub nominatim_url: String,
    /// Full-surah MP3 recordings (`mp3quran.net`).
    #[serde(default = "default_audio_url")]
    pub audio_url: String,
    /// Text edition requested from alquran.cloud.
    #[serde(default = "default_quran_edition")]
    pub quran_edition: String,
    /// Commentary used when none is requested.
    #[serde(default = "default_tafseer_edition")]
    pub tafseer_edition: String,
    /// Aladhan calculation method (8 = Gulf Region).
    #[serde(default = "default_prayer_method")]
    pub prayer_method: u32,
}

fn default_alquran_url() -> String {
    "https://api.alquran.cloud/v1".into()
}

fn default_quran_com_url() -> String {
    "https://api.quran.com/api/v4".into()
}

fn default_aladhan_url() -> String {
    "https://api.aladhan.com/v1".into()
}

fn default_nominatim_url() -> String {
    "https://nominatim.openstreetmap.org".into()
}

fn default_audio_url() -> String {
    "https://server8.mp3quran.net".into()
}

fn default_quran_edition() -> String {
    "ar.alafasy".into()
}

fn default_tafseer_edition() -> String {
    "ar-muyassar".into()
}

const fn default_prayer_method() -> u32 {
    8
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            alquran_url: default_alquran_url(),
            quran_com_url: default_quran_com_url(),
            aladhan_url: default_aladhan_url(),
            nominatim_url: default_nominatim_url(),
            audio_url: default_audio_url(),
            quran_edition: default_quran_edition(),
            tafseer_edition: default_tafseer_edition(),
            prayer_method: default_prayer_method(),
        }
    }
}

impl ApiConfig {
    /// `(field, url)` pairs for validation and connectivity checks.
    #[must_use]
    pub fn endpoints(&self) -> [(&'static str, &str); 5] {
        [
            ("alquran_url", &self.alquran_url),
            ("quran_com_url", &self.quran_com_url),
            ("aladhan_url", &self.aladhan_url),
            ("nominatim_url", &self.nominatim_url),
            ("audio_url", &self.audio_url),
        ]
    }
}

/// HTTP client configuration shared by every upstream client.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Total attempts per request, including the first (2 = one retry).
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Sent with every request; nominatim rejects anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_http_timeout_ms() -> u64 {
    5000
}

const fn default_http_connect_timeout_ms() -> u64 {
    2000
}

const fn default_http_retry_max_attempts() -> u32 {
    2
}

const fn default_http_retry_backoff_ms() -> u64 {
    250
}

fn default_user_agent() -> String {
    concat!("mishkat/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
            user_agent: default_user_agent(),
        }
    }
}
