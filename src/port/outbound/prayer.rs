//! Prayer time and reverse-geocoding ports.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Coordinates, PrayerTimings};
use crate::error::Result;

/// Computes the prayer board for a place and day.
#[async_trait]
pub trait PrayerTimesSource: Send + Sync {
    async fn timings(&self, coordinates: Coordinates, date: NaiveDate) -> Result<PrayerTimings>;

    fn source_name(&self) -> &'static str;
}

/// Turns coordinates into a human-readable place name.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` when the service knows no name for the place.
    async fn place_name(&self, coordinates: Coordinates) -> Result<Option<String>>;
}
