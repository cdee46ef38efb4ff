//! In-process implementations of the outbound ports.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;

use crate::adapter::outbound::catalog::editions;
use crate::domain::{
    Coordinates, Dua, DuaCategory, HadithCollection, HadithPage, PageRequest, PrayerTimings,
    Surah, SurahDetail, SurahNumber, Tafseer, TafseerEdition,
};
use crate::error::{Error, Result};
use crate::port::outbound::dua::DuaSource;
use crate::port::outbound::hadith::HadithSource;
use crate::port::outbound::prayer::{Geocoder, PrayerTimesSource};
use crate::port::outbound::quran::{QuranSource, TafseerSource};

fn offline_error() -> Error {
    Error::Upstream {
        service: "offline",
        message: "source unavailable".to_string(),
    }
}

/// Fails every call, like an unreachable upstream.
#[derive(Debug, Default, Clone, Copy)]
pub struct Offline;

#[async_trait]
impl QuranSource for Offline {
    async fn list_surahs(&self) -> Result<Vec<Surah>> {
        Err(offline_error())
    }

    async fn surah_detail(&self, _number: SurahNumber) -> Result<SurahDetail> {
        Err(offline_error())
    }

    fn source_name(&self) -> &'static str {
        "offline"
    }
}

#[async_trait]
impl TafseerSource for Offline {
    async fn editions(&self) -> Result<Vec<TafseerEdition>> {
        Err(offline_error())
    }

    async fn ayah_tafseer(
        &self,
        _surah: SurahNumber,
        _ayah: u32,
        _edition: Option<&str>,
    ) -> Result<Tafseer> {
        Err(offline_error())
    }

    fn source_name(&self) -> &'static str {
        "offline"
    }
}

#[async_trait]
impl HadithSource for Offline {
    async fn collections(&self) -> Result<Vec<HadithCollection>> {
        Err(offline_error())
    }

    async fn hadiths(&self, _collection: &str, _page: PageRequest) -> Result<HadithPage> {
        Err(offline_error())
    }

    fn source_name(&self) -> &'static str {
        "offline"
    }
}

#[async_trait]
impl PrayerTimesSource for Offline {
    async fn timings(&self, _coordinates: Coordinates, _date: NaiveDate) -> Result<PrayerTimings> {
        Err(offline_error())
    }

    fn source_name(&self) -> &'static str {
        "offline"
    }
}

#[async_trait]
impl Geocoder for Offline {
    async fn place_name(&self, _coordinates: Coordinates) -> Result<Option<String>> {
        Err(offline_error())
    }
}

#[async_trait]
impl DuaSource for Offline {
    async fn categories(&self) -> Result<Vec<DuaCategory>> {
        Err(offline_error())
    }

    async fn duas(&self) -> Result<Vec<Dua>> {
        Err(offline_error())
    }
}

/// Serves a fixed surah index and whichever surah texts were registered.
#[derive(Debug, Default)]
pub struct StaticQuran {
    surahs: Vec<Surah>,
    details: HashMap<u32, SurahDetail>,
}

impl StaticQuran {
    pub fn new(surahs: Vec<Surah>) -> Self {
        Self {
            surahs,
            details: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: SurahDetail) -> Self {
        self.details.insert(detail.surah.number, detail);
        self
    }
}

#[async_trait]
impl QuranSource for StaticQuran {
    async fn list_surahs(&self) -> Result<Vec<Surah>> {
        Ok(self.surahs.clone())
    }

    async fn surah_detail(&self, number: SurahNumber) -> Result<SurahDetail> {
        self.details
            .get(&number.get())
            .cloned()
            .ok_or_else(|| Error::Upstream {
                service: "static",
                message: format!("no text for surah {number}"),
            })
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Returns the same commentary for every ayah and records each request.
#[derive(Debug)]
pub struct StaticTafseer {
    tafseer: Tafseer,
    requests: Mutex<Vec<(u32, u32, Option<String>)>>,
}

impl StaticTafseer {
    pub fn new(text: &str) -> Self {
        Self {
            tafseer: Tafseer {
                text: text.to_string(),
                author_name: "test author".to_string(),
                resource_name: "test resource".to_string(),
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(surah, ayah, edition)` for every lookup so far.
    pub fn requests(&self) -> Vec<(u32, u32, Option<String>)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl TafseerSource for StaticTafseer {
    async fn editions(&self) -> Result<Vec<TafseerEdition>> {
        Ok(editions())
    }

    async fn ayah_tafseer(
        &self,
        surah: SurahNumber,
        ayah: u32,
        edition: Option<&str>,
    ) -> Result<Tafseer> {
        self.requests
            .lock()
            .push((surah.get(), ayah, edition.map(str::to_string)));
        Ok(self.tafseer.clone())
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}

/// Returns one board for any location and date, recording the queries.
#[derive(Debug)]
pub struct FixedPrayerTimes {
    timings: PrayerTimings,
    queries: Mutex<Vec<(Coordinates, NaiveDate)>>,
}

impl FixedPrayerTimes {
    pub fn new(timings: PrayerTimings) -> Self {
        Self {
            timings,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(Coordinates, NaiveDate)> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl PrayerTimesSource for FixedPrayerTimes {
    async fn timings(&self, coordinates: Coordinates, date: NaiveDate) -> Result<PrayerTimings> {
        self.queries.lock().push((coordinates, date));
        Ok(self.timings.clone())
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// Resolves every location to the same place name.
#[derive(Debug, Clone, Default)]
pub struct FixedGeocoder(pub Option<String>);

impl FixedGeocoder {
    pub fn named(name: &str) -> Self {
        Self(Some(name.to_string()))
    }
}

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn place_name(&self, _coordinates: Coordinates) -> Result<Option<String>> {
        Ok(self.0.clone())
    }
}
