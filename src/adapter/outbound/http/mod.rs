//! REST clients for the third-party content APIs.
//!
//! Every client shares [`JsonClient`], which owns the reqwest client, the
//! timeouts, and the retry policy from [`HttpConfig`].

pub mod aladhan;
pub mod alquran;
pub mod nominatim;
pub mod quran_com;

use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::Result;
use crate::infrastructure::config::api::HttpConfig;

/// GET-and-decode JSON with bounded retries.
///
/// Only timeouts and connection failures are retried; an HTTP error status
/// or an undecodable body fails immediately.
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: HttpClient,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl JsonClient {
    #[must_use]
    pub fn from_config(config: &HttpConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    /// Total attempts per request, never less than one.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.retry_max_attempts.max(1)
    }

    /// GET `url` with the given query pairs and decode the JSON body.
    pub async fn get_json<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.max_attempts();

        loop {
            attempt += 1;
            let response = self.http.get(url).query(query).send().await;
            let response = match response {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = response.error_for_status()?;
            let status = response.status();

            match response.json::<T>().await {
                Ok(parsed) => {
                    debug!(url, %status, attempt, "Decoded response");
                    return Ok(parsed);
                }
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    /// Issue a HEAD request and report the status code.
    pub async fn probe(&self, url: &str) -> Result<u16> {
        let response = self.http.head(url).send().await?;
        Ok(response.status().as_u16())
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }
}

/// Join a base URL and a path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
