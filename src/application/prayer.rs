//! Prayer times for a location, with place naming and the next-prayer
//! countdown.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{Coordinates, NextPrayer, PrayerTimings, TimeOfDay};
use crate::error::Result;
use crate::port::outbound::prayer::{Geocoder, PrayerTimesSource};

/// Shown when a located position cannot be named.
pub const UNNAMED_PLACE: &str = "موقعك الحالي";

/// Shown when no location was given or configured.
pub const NO_LOCATION: &str = "تعذر تحديد الموقع";

/// How the coordinates for a lookup were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    /// Passed on the command line.
    Explicit,
    /// Read from configuration or the environment.
    Configured,
    /// Nothing known; Mecca is used.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub coordinates: Coordinates,
    pub source: LocationSource,
}

/// Everything the prayer screen shows for one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerBoard {
    pub date: NaiveDate,
    pub location: ResolvedLocation,
    pub place: String,
    pub timings: PrayerTimings,
    /// Countdown from the current time; only present for today's board.
    pub next: Option<NextPrayer>,
}

pub struct PrayerService {
    times: Arc<dyn PrayerTimesSource>,
    geocoder: Arc<dyn Geocoder>,
    configured: Option<Coordinates>,
}

impl PrayerService {
    pub fn new(
        times: Arc<dyn PrayerTimesSource>,
        geocoder: Arc<dyn Geocoder>,
        configured: Option<Coordinates>,
    ) -> Self {
        Self {
            times,
            geocoder,
            configured,
        }
    }

    /// Pick coordinates: explicit, then configured, then Mecca.
    pub fn resolve_location(&self, explicit: Option<(f64, f64)>) -> Result<ResolvedLocation> {
        if let Some((latitude, longitude)) = explicit {
            return Ok(ResolvedLocation {
                coordinates: Coordinates::new(latitude, longitude)?,
                source: LocationSource::Explicit,
            });
        }
        Ok(match self.configured {
            Some(coordinates) => ResolvedLocation {
                coordinates,
                source: LocationSource::Configured,
            },
            None => ResolvedLocation {
                coordinates: Coordinates::MECCA,
                source: LocationSource::Default,
            },
        })
    }

    /// Human-readable name of a position; never fails.
    pub async fn place_name(&self, coordinates: Coordinates) -> String {
        match self.geocoder.place_name(coordinates).await {
            Ok(Some(name)) => name,
            Ok(None) => UNNAMED_PLACE.to_string(),
            Err(err) => {
                warn!(%coordinates, error = %err, "Reverse geocoding failed");
                UNNAMED_PLACE.to_string()
            }
        }
    }

    pub async fn today(&self, coordinates: Coordinates, date: NaiveDate) -> Result<PrayerTimings> {
        let timings = self.times.timings(coordinates, date).await?;
        debug!(source = self.times.source_name(), %date, "Loaded prayer times");
        Ok(timings)
    }

    #[must_use]
    pub fn next(&self, timings: &PrayerTimings, now: TimeOfDay) -> NextPrayer {
        timings.next_prayer(now)
    }

    /// Resolve the location, name it, and load the day's board.
    ///
    /// `now` is the current time when `date` is today, and `None` for any
    /// other day.
    pub async fn board(
        &self,
        explicit: Option<(f64, f64)>,
        date: NaiveDate,
        now: Option<TimeOfDay>,
    ) -> Result<PrayerBoard> {
        let location = self.resolve_location(explicit)?;
        let place = match location.source {
            LocationSource::Default => NO_LOCATION.to_string(),
            LocationSource::Explicit | LocationSource::Configured => {
                self.place_name(location.coordinates).await
            }
        };
        let timings = self.today(location.coordinates, date).await?;
        let next = now.map(|now| self.next(&timings, now));

        Ok(PrayerBoard {
            date,
            location,
            place,
            timings,
            next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::Prayer;
    use crate::error::Error;
    use crate::testkit::domain::mecca_timings;
    use crate::testkit::source::{FixedGeocoder, FixedPrayerTimes, Offline};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
    }

    fn now(value: &str) -> TimeOfDay {
        TimeOfDay::parse(value).expect("valid time")
    }

    #[test]
    fn location_precedence() {
        let cairo = Coordinates::new(30.0444, 31.2357).expect("valid");
        let service = PrayerService::new(
            Arc::new(Offline),
            Arc::new(Offline),
            Some(cairo),
        );

        let explicit = service.resolve_location(Some((24.7, 46.7))).expect("explicit");
        assert_eq!(explicit.source, LocationSource::Explicit);
        assert_eq!(explicit.coordinates.latitude, 24.7);

        let configured = service.resolve_location(None).expect("configured");
        assert_eq!(configured.source, LocationSource::Configured);
        assert_eq!(configured.coordinates, cairo);

        let unset = PrayerService::new(Arc::new(Offline), Arc::new(Offline), None);
        let fallback = unset.resolve_location(None).expect("default");
        assert_eq!(fallback.source, LocationSource::Default);
        assert_eq!(fallback.coordinates, Coordinates::MECCA);
    }

    #[test]
    fn explicit_location_is_validated() {
        let service = PrayerService::new(Arc::new(Offline), Arc::new(Offline), None);
        assert!(matches!(
            service.resolve_location(Some((91.0, 0.0))),
            Err(Error::Domain(DomainError::InvalidCoordinates { .. }))
        ));
    }

    #[tokio::test]
    async fn geocoder_failure_yields_generic_name() {
        let service = PrayerService::new(Arc::new(Offline), Arc::new(Offline), None);
        assert_eq!(service.place_name(Coordinates::MECCA).await, UNNAMED_PLACE);

        let nameless = PrayerService::new(Arc::new(Offline), Arc::new(FixedGeocoder(None)), None);
        assert_eq!(nameless.place_name(Coordinates::MECCA).await, UNNAMED_PLACE);
    }

    #[tokio::test]
    async fn board_combines_location_times_and_countdown() {
        let times = Arc::new(FixedPrayerTimes::new(mecca_timings()));
        let service = PrayerService::new(
            times.clone(),
            Arc::new(FixedGeocoder::named("مكة المكرمة, السعودية")),
            None,
        );

        let board = service
            .board(Some((21.4225, 39.8262)), date(), Some(now("13:00")))
            .await
            .expect("board");
        assert_eq!(board.place, "مكة المكرمة, السعودية");
        let next = board.next.expect("countdown for today");
        assert_eq!(next.prayer, Prayer::Asr);
        assert_eq!(next.minutes_remaining, 155);
        assert_eq!(times.queries().len(), 1);
        assert_eq!(times.queries()[0].1, date());
    }

    #[tokio::test]
    async fn default_location_is_not_geocoded() {
        let service = PrayerService::new(
            Arc::new(FixedPrayerTimes::new(mecca_timings())),
            Arc::new(FixedGeocoder::named("should not appear")),
            None,
        );

        let board = service
            .board(None, date(), Some(now("23:00")))
            .await
            .expect("board");
        assert_eq!(board.place, NO_LOCATION);
        assert_eq!(board.location.coordinates, Coordinates::MECCA);
        let next = board.next.expect("countdown for today");
        assert!(next.tomorrow);
        assert_eq!(next.prayer, Prayer::Fajr);
    }

    #[tokio::test]
    async fn board_for_another_day_has_no_countdown() {
        let service = PrayerService::new(
            Arc::new(FixedPrayerTimes::new(mecca_timings())),
            Arc::new(FixedGeocoder(None)),
            None,
        );

        let board = service.board(None, date(), None).await.expect("board");
        assert!(board.next.is_none());
        assert_eq!(board.timings, mecca_timings());
    }

    #[tokio::test]
    async fn prayer_source_failure_propagates() {
        let service = PrayerService::new(Arc::new(Offline), Arc::new(Offline), None);
        assert!(service.board(None, date(), Some(now("12:00"))).await.is_err());
    }
}
