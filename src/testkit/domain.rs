//! Builders for domain records used across tests.

use std::collections::HashMap;

use crate::domain::{Ayah, PrayerTimings, RevelationType, Surah, SurahDetail};

/// Build a [`Surah`] with an unspecified ayah count.
pub fn surah(
    number: u32,
    name: &str,
    english_name: &str,
    translation: &str,
    revelation_type: RevelationType,
) -> Surah {
    Surah {
        number,
        name: name.to_string(),
        english_name: english_name.to_string(),
        english_name_translation: translation.to_string(),
        number_of_ayahs: 0,
        revelation_type,
    }
}

/// Build an [`Ayah`] at position `number_in_surah`.
pub fn ayah(number_in_surah: u32, text: &str) -> Ayah {
    Ayah {
        number: number_in_surah,
        text: text.to_string(),
        number_in_surah,
        juz: 1,
        manzil: 1,
        page: 1,
        ruku: 1,
        hizb_quarter: 1,
        sajda: false,
    }
}

/// Wrap ayahs in a [`SurahDetail`] whose ayah count matches.
pub fn surah_detail(number: u32, ayahs: Vec<Ayah>) -> SurahDetail {
    let mut surah = surah(
        number,
        &format!("سورة {number}"),
        &format!("Surah {number}"),
        "",
        RevelationType::Meccan,
    );
    surah.number_of_ayahs = u32::try_from(ayahs.len()).unwrap_or(u32::MAX);
    SurahDetail { surah, ayahs }
}

/// Al-Faatiha, Al-Baqara and Al-Ikhlaas with their real ayah counts.
pub fn surah_index() -> Vec<Surah> {
    let mut index = vec![
        surah(1, "سُورَةُ ٱلْفَاتِحَةِ", "Al-Faatiha", "The Opening", RevelationType::Meccan),
        surah(2, "سُورَةُ البَقَرَةِ", "Al-Baqara", "The Cow", RevelationType::Medinan),
        surah(112, "سُورَةُ الإِخْلَاصِ", "Al-Ikhlaas", "Sincerity", RevelationType::Meccan),
    ];
    index[0].number_of_ayahs = 7;
    index[1].number_of_ayahs = 286;
    index[2].number_of_ayahs = 4;
    index
}

/// A prayer board from `HH:MM` strings in display order.
pub fn timings(times: [&str; 6]) -> PrayerTimings {
    let keys = ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"];
    let map: HashMap<String, String> = keys
        .iter()
        .zip(times)
        .map(|(k, v)| ((*k).to_string(), v.to_string()))
        .collect();
    PrayerTimings::from_map(&map).expect("valid test timings")
}

/// A typical Mecca board.
pub fn mecca_timings() -> PrayerTimings {
    timings(["04:30", "05:50", "12:15", "15:35", "18:20", "19:50"])
}
