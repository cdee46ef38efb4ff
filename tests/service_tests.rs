//! Application services wired to in-process sources.

use std::sync::Arc;

use chrono::NaiveDate;
use mishkat::adapter::outbound::catalog::TafseerCatalog;
use mishkat::adapter::outbound::storage::MemoryStore;
use mishkat::application::{
    Bookmarks, LocationSource, PrayerService, QuranService, TafseerService,
};
use mishkat::domain::{Coordinates, Prayer, TimeOfDay};
use mishkat::testkit::domain::{mecca_timings, surah_index};
use mishkat::testkit::source::{
    FixedGeocoder, FixedPrayerTimes, Offline, StaticQuran, StaticTafseer,
};

fn quran() -> QuranService {
    QuranService::new(
        Arc::new(StaticQuran::new(surah_index())),
        "https://audio.example",
        1,
    )
}

#[tokio::test]
async fn search_then_bookmark() {
    let quran = quran();
    let found = quran.surahs(Some("البقرة")).await.expect("search");
    assert_eq!(found.len(), 1);

    let bookmarks = Bookmarks::new(Arc::new(MemoryStore::new()));
    assert!(bookmarks.add(&found[0]).expect("add"));
    assert!(!bookmarks.toggle(&found[0]).expect("toggle off"));
    assert!(bookmarks.toggle(&found[0]).expect("toggle on"));

    let favorites = bookmarks.favorites().expect("list");
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].number_of_ayahs, 286);
}

#[tokio::test]
async fn prayer_board_for_explicit_location() {
    let times = Arc::new(FixedPrayerTimes::new(mecca_timings()));
    let service = PrayerService::new(
        times.clone(),
        Arc::new(FixedGeocoder::named("القاهرة, مصر")),
        None,
    );
    let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
    let now = TimeOfDay::from_hm(13, 0).expect("valid time");

    let board = service
        .board(Some((30.0444, 31.2357)), date, Some(now))
        .await
        .expect("board");

    assert_eq!(board.location.source, LocationSource::Explicit);
    assert_eq!(board.place, "القاهرة, مصر");
    let next = board.next.expect("countdown for today");
    assert_eq!(next.prayer, Prayer::Asr);
    assert_eq!(next.minutes_remaining, 155);
    assert!(!next.tomorrow);
    assert_eq!(
        times.queries(),
        vec![(Coordinates::new(30.0444, 31.2357).expect("valid"), date)]
    );
}

#[tokio::test]
async fn prayer_board_after_isha_points_to_fajr() {
    let service = PrayerService::new(
        Arc::new(FixedPrayerTimes::new(mecca_timings())),
        Arc::new(Offline),
        None,
    );
    let date = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
    let now = TimeOfDay::from_hm(23, 0).expect("valid time");

    let board = service.board(None, date, Some(now)).await.expect("board");
    assert_eq!(board.location.source, LocationSource::Default);
    assert_eq!(board.location.coordinates, Coordinates::MECCA);
    let next = board.next.expect("countdown for today");
    assert_eq!(next.prayer, Prayer::Fajr);
    assert!(next.tomorrow);
}

#[tokio::test]
async fn tafseer_prefers_live_source() {
    let live = Arc::new(StaticTafseer::new("تفسير حي"));
    let service = TafseerService::new(
        live.clone(),
        Arc::new(TafseerCatalog::new()),
        "ar-muyassar",
    );

    let lookup = service
        .tafseer(112, 1, Some("ar-tafsir-ibn-kathir"))
        .await
        .expect("lookup");
    assert!(!lookup.fallback);
    assert_eq!(lookup.tafseer.text, "تفسير حي");
    assert_eq!(lookup.edition, "ar-tafsir-ibn-kathir");
    assert_eq!(
        live.requests(),
        vec![(112, 1, Some("ar-tafsir-ibn-kathir".to_string()))]
    );

    assert!(service.tafseer(112, 5, None).await.is_err());
    assert_eq!(live.requests().len(), 1);
}
