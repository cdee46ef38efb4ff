//! Aladhan client for daily prayer timings.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use super::{join_url, JsonClient};
use crate::domain::{Coordinates, PrayerTimings};
use crate::error::{Error, Result};
use crate::port::outbound::prayer::PrayerTimesSource;

#[derive(Debug, Deserialize)]
pub struct TimingsResponse {
    pub code: u16,
    pub status: String,
    pub data: TimingsData,
}

#[derive(Debug, Deserialize)]
pub struct TimingsData {
    pub timings: HashMap<String, String>,
}

impl TimingsResponse {
    fn into_timings(self) -> Result<PrayerTimings> {
        if self.code != 200 {
            return Err(Error::Upstream {
                service: "aladhan",
                message: format!("{} {}", self.code, self.status),
            });
        }
        Ok(PrayerTimings::from_map(&self.data.timings)?)
    }
}

/// Aladhan expects dates as `DD-MM-YYYY`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Client for `api.aladhan.com`.
pub struct AladhanClient {
    http: JsonClient,
    base_url: String,
    method: u32,
}

impl AladhanClient {
    #[must_use]
    pub fn new(http: JsonClient, base_url: impl Into<String>, method: u32) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            method,
        }
    }
}

#[async_trait]
impl PrayerTimesSource for AladhanClient {
    async fn timings(&self, coordinates: Coordinates, date: NaiveDate) -> Result<PrayerTimings> {
        let url = join_url(
            &self.base_url,
            &format!("timingsByCoordinates/{}", format_date(date)),
        );
        info!(url = %url, %coordinates, method = self.method, "Fetching prayer times");

        let query = [
            ("latitude", coordinates.latitude.to_string()),
            ("longitude", coordinates.longitude.to_string()),
            ("method", self.method.to_string()),
        ];
        let response: TimingsResponse = self.http.get_json(&url, &query).await?;
        let timings = response.into_timings()?;
        debug!(fajr = %timings.fajr, isha = %timings.isha, "Fetched prayer times");

        Ok(timings)
    }

    fn source_name(&self) -> &'static str {
        "aladhan"
    }
}
