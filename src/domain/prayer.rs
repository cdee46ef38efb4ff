//! Prayer times: parsing upstream `HH:MM` strings, 12-hour display and the
//! next-prayer countdown.

use std::collections::HashMap;
use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The six daily times shown on the prayer board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// Display order for the day.
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Key used by the timings API.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
        }
    }

    #[must_use]
    pub const fn arabic(self) -> &'static str {
        match self {
            Self::Fajr => "الفجر",
            Self::Sunrise => "الشروق",
            Self::Dhuhr => "الظهر",
            Self::Asr => "العصر",
            Self::Maghrib => "المغرب",
            Self::Isha => "العشاء",
        }
    }

    /// Sunrise is listed but is not a prayer one waits for.
    #[must_use]
    pub const fn is_prayer(self) -> bool {
        !matches!(self, Self::Sunrise)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A wall-clock time at minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse `HH:MM`, ignoring anything after the minutes.
    ///
    /// The timings API sometimes appends a zone label (`"05:12 (EET)"`).
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidTime {
            value: value.to_string(),
        };

        let clock = value.split_whitespace().next().ok_or_else(invalid)?;
        let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;

        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Build from hour and minute, rejecting out-of-range values.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTime {
                value: format!("{hour}:{minute}"),
            })
    }

    /// Truncate a clock reading to the minute.
    #[must_use]
    pub fn from_naive(time: NaiveTime) -> Self {
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    fn minutes_since_midnight(self) -> i64 {
        i64::from(self.hour() * 60 + self.minute())
    }

    /// 12-hour clock with the Arabic meridiem marker (ص before noon, م after).
    #[must_use]
    pub fn format_12h(self) -> String {
        let hour = self.hour();
        let marker = if hour >= 12 { "م" } else { "ص" };
        let hour12 = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour12}:{:02} {marker}", self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The prayer board for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerTimings {
    pub fajr: TimeOfDay,
    pub sunrise: TimeOfDay,
    pub dhuhr: TimeOfDay,
    pub asr: TimeOfDay,
    pub maghrib: TimeOfDay,
    pub isha: TimeOfDay,
}

impl PrayerTimings {
    /// Pick the six displayed times out of the upstream timing map.
    ///
    /// Extra keys (`Imsak`, `Midnight`, `Firstthird`, ...) are ignored.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, DomainError> {
        let get = |prayer: Prayer| -> Result<TimeOfDay, DomainError> {
            let raw = map.get(prayer.key()).ok_or(DomainError::MissingPrayer {
                prayer: prayer.key(),
            })?;
            TimeOfDay::parse(raw)
        };

        Ok(Self {
            fajr: get(Prayer::Fajr)?,
            sunrise: get(Prayer::Sunrise)?,
            dhuhr: get(Prayer::Dhuhr)?,
            asr: get(Prayer::Asr)?,
            maghrib: get(Prayer::Maghrib)?,
            isha: get(Prayer::Isha)?,
        })
    }

    #[must_use]
    pub fn time_of(&self, prayer: Prayer) -> TimeOfDay {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = (Prayer, TimeOfDay)> + '_ {
        Prayer::ALL.into_iter().map(|p| (p, self.time_of(p)))
    }

    /// The first prayer strictly after `now`.
    ///
    /// After Isha the countdown wraps to tomorrow's Fajr, using today's Fajr
    /// time as the estimate.
    #[must_use]
    pub fn next_prayer(&self, now: TimeOfDay) -> NextPrayer {
        let upcoming = self
            .entries()
            .filter(|(prayer, _)| prayer.is_prayer())
            .find(|(_, time)| *time > now);

        let (prayer, time, tomorrow) = match upcoming {
            Some((prayer, time)) => (prayer, time, false),
            None => (Prayer::Fajr, self.fajr, true),
        };

        let mut minutes = time.minutes_since_midnight() - now.minutes_since_midnight();
        if tomorrow {
            minutes += 24 * 60;
        }

        NextPrayer {
            prayer,
            time,
            minutes_remaining: minutes,
            tomorrow,
        }
    }
}

/// Countdown to the upcoming prayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub time: TimeOfDay,
    pub minutes_remaining: i64,
    /// The prayer falls on the following day.
    pub tomorrow: bool,
}

impl NextPrayer {
    /// Remaining time as `"{h}h {m}m"`, or `"{m}m"` under an hour.
    #[must_use]
    pub fn time_remaining(&self) -> String {
        let hours = self.minutes_remaining / 60;
        let minutes = self.minutes_remaining % 60;
        if hours == 0 {
            format!("{minutes}m")
        } else {
            format!("{hours}h {minutes}m")
        }
    }
}

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Used whenever no location is known.
    pub const MECCA: Coordinates = Coordinates {
        latitude: 21.3891,
        longitude: 39.8579,
    };

    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if valid {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(DomainError::InvalidCoordinates {
                latitude,
                longitude,
            })
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(value: &str) -> TimeOfDay {
        TimeOfDay::parse(value).expect("valid time")
    }

    fn board() -> PrayerTimings {
        PrayerTimings {
            fajr: t("04:30"),
            sunrise: t("05:55"),
            dhuhr: t("12:10"),
            asr: t("15:35"),
            maghrib: t("18:20"),
            isha: t("19:50"),
        }
    }

    #[test]
    fn parse_accepts_zone_suffix() {
        let time = t("05:12 (EET)");
        assert_eq!((time.hour(), time.minute()), (5, 12));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("noon").is_err());
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("12-30").is_err());
    }

    #[test]
    fn format_12h_uses_arabic_markers() {
        assert_eq!(t("04:30").format_12h(), "4:30 ص");
        assert_eq!(t("00:05").format_12h(), "12:05 ص");
        assert_eq!(t("12:10").format_12h(), "12:10 م");
        assert_eq!(t("19:50").format_12h(), "7:50 م");
    }

    #[test]
    fn from_map_ignores_extra_keys() {
        let mut map: HashMap<String, String> = [
            ("Fajr", "04:30"),
            ("Sunrise", "05:55"),
            ("Dhuhr", "12:10"),
            ("Asr", "15:35"),
            ("Maghrib", "18:20"),
            ("Isha", "19:50"),
            ("Imsak", "04:20"),
            ("Midnight", "00:05"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        assert_eq!(PrayerTimings::from_map(&map), Ok(board()));

        map.remove("Asr");
        assert_eq!(
            PrayerTimings::from_map(&map),
            Err(DomainError::MissingPrayer { prayer: "Asr" })
        );
    }

    #[test]
    fn next_prayer_skips_sunrise() {
        let next = board().next_prayer(t("05:00"));
        assert_eq!(next.prayer, Prayer::Dhuhr);
        assert_eq!(next.minutes_remaining, 7 * 60 + 10);
        assert_eq!(next.time_remaining(), "7h 10m");
        assert!(!next.tomorrow);
    }

    #[test]
    fn next_prayer_is_strictly_after_now() {
        let next = board().next_prayer(t("12:10"));
        assert_eq!(next.prayer, Prayer::Asr);
    }

    #[test]
    fn next_prayer_under_an_hour_omits_hours() {
        let next = board().next_prayer(t("18:00"));
        assert_eq!(next.prayer, Prayer::Maghrib);
        assert_eq!(next.time_remaining(), "20m");
    }

    #[test]
    fn next_prayer_wraps_to_tomorrows_fajr() {
        let next = board().next_prayer(t("22:00"));
        assert_eq!(next.prayer, Prayer::Fajr);
        assert!(next.tomorrow);
        assert_eq!(next.minutes_remaining, 6 * 60 + 30);
    }

    #[test]
    fn before_fajr_counts_down_to_todays_fajr() {
        let next = board().next_prayer(t("01:00"));
        assert_eq!(next.prayer, Prayer::Fajr);
        assert!(!next.tomorrow);
        assert_eq!(next.time_remaining(), "3h 30m");
    }

    #[test]
    fn coordinates_validate_ranges() {
        assert!(Coordinates::new(21.4, 39.8).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }
}
