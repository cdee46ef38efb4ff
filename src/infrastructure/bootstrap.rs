//! Composition root: builds application services from configuration.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::catalog::{DuaCatalog, HadithCatalog, TafseerCatalog};
use crate::adapter::outbound::http::aladhan::AladhanClient;
use crate::adapter::outbound::http::alquran::AlQuranClient;
use crate::adapter::outbound::http::nominatim::NominatimGeocoder;
use crate::adapter::outbound::http::quran_com::QuranComTafseerClient;
use crate::adapter::outbound::http::JsonClient;
use crate::adapter::outbound::storage::JsonFileStore;
use crate::application::{
    Bookmarks, DuaService, HadithService, PrayerService, QuranService, ReflectionService,
    TafseerService, Tasbih,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::storage::KeyValueStore;

fn http(config: &Config) -> JsonClient {
    JsonClient::from_config(&config.http)
}

pub fn build_quran_service(config: &Config) -> QuranService {
    let client = AlQuranClient::new(
        http(config),
        config.api.alquran_url.clone(),
        config.api.quran_edition.clone(),
    );
    QuranService::new(
        Arc::new(client),
        config.api.audio_url.clone(),
        config.audio.default_reciter,
    )
}

pub fn build_tafseer_service(config: &Config) -> TafseerService {
    let live = QuranComTafseerClient::new(
        http(config),
        config.api.quran_com_url.clone(),
        config.api.tafseer_edition.clone(),
    );
    TafseerService::new(
        Arc::new(live),
        Arc::new(TafseerCatalog::new()),
        config.api.tafseer_edition.clone(),
    )
}

pub fn build_hadith_service() -> HadithService {
    HadithService::new(Arc::new(HadithCatalog::new()))
}

/// Prayer times from Aladhan, place names from Nominatim.
///
/// # Errors
///
/// Fails when the configured location is incomplete or out of range.
pub fn build_prayer_service(config: &Config) -> Result<PrayerService> {
    let times = AladhanClient::new(
        http(config),
        config.api.aladhan_url.clone(),
        config.api.prayer_method,
    );
    let geocoder = NominatimGeocoder::new(http(config), config.api.nominatim_url.clone());
    Ok(PrayerService::new(
        Arc::new(times),
        Arc::new(geocoder),
        config.coordinates()?,
    ))
}

pub fn build_dua_service() -> DuaService {
    DuaService::new(Arc::new(DuaCatalog::new()))
}

pub fn build_reflection_service() -> ReflectionService {
    ReflectionService::new()
}

/// Open the on-disk store shared by bookmarks and the tasbih counter.
pub fn open_store(path: &Path) -> Result<Arc<dyn KeyValueStore>> {
    debug!(path = %path.display(), "Opening local storage");
    Ok(Arc::new(JsonFileStore::open(path)?))
}

pub fn build_bookmarks(store: Arc<dyn KeyValueStore>) -> Bookmarks {
    Bookmarks::new(store)
}

pub fn build_tasbih(store: Arc<dyn KeyValueStore>) -> Tasbih {
    Tasbih::new(store)
}

/// `(name, url)` of every upstream, for connectivity checks.
#[must_use]
pub fn upstreams(config: &Config) -> Vec<(&'static str, String)> {
    config
        .api
        .endpoints()
        .into_iter()
        .map(|(name, url)| (name, url.to_string()))
        .collect()
}

/// Shared client for connectivity probes.
#[must_use]
pub fn probe_client(config: &Config) -> JsonClient {
    http(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::config::offline;

    #[tokio::test]
    async fn offline_services_fail_or_fall_back() {
        let config = offline();

        let quran = build_quran_service(&config);
        assert!(quran.surahs(None).await.is_err());

        let tafseer = build_tafseer_service(&config);
        let lookup = tafseer.tafseer(1, 1, None).await.expect("fallback");
        assert!(lookup.fallback);
    }

    #[tokio::test]
    async fn catalogue_services_work_without_network() {
        assert_eq!(
            build_hadith_service()
                .collections()
                .await
                .expect("collections")
                .len(),
            6
        );
        assert_eq!(build_dua_service().duas(None).await.expect("duas").len(), 3);
    }

    #[test]
    fn store_backs_bookmarks_and_tasbih() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = open_store(&dir.path().join("storage.json")).expect("open");

        build_tasbih(store.clone()).increment().expect("increment");
        build_bookmarks(store.clone())
            .save_note(1, "الفاتحة")
            .expect("save note");

        let reopened = open_store(&dir.path().join("storage.json")).expect("reopen");
        assert_eq!(build_tasbih(reopened.clone()).count().expect("count"), 1);
        assert_eq!(build_bookmarks(reopened).notes().expect("notes").len(), 1);
    }

    #[test]
    fn prayer_service_rejects_half_location() {
        let mut config = offline();
        config.location.latitude = Some(21.0);
        assert!(build_prayer_service(&config).is_err());
    }

    #[test]
    fn upstreams_list_every_endpoint() {
        let names: Vec<&str> = upstreams(&Config::default())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names.len(), 5);
    }
}
