//! Display records and the pure logic behind them.
//!
//! Nothing here performs I/O: search normalization, prayer-time arithmetic,
//! the audio timeline and the daily reflection are all plain functions over
//! these types.

pub mod bookmark;
pub mod dua;
pub mod error;
pub mod hadith;
pub mod prayer;
pub mod recitation;
pub mod reflection;
pub mod search;
pub mod surah;
pub mod tafseer;

pub use bookmark::{FavoriteSurah, SurahNote};
pub use dua::{CategoryFilter, Dua, DuaCategory};
pub use hadith::{Hadith, HadithCollection, HadithPage, PageRequest};
pub use prayer::{Coordinates, NextPrayer, Prayer, PrayerTimings, TimeOfDay};
pub use recitation::{AyahTimeline, Reciter, RECITERS};
pub use reflection::{reflection_for, Reflection, REFLECTIONS};
pub use search::{normalize_arabic, SurahQuery};
pub use surah::{Ayah, RevelationType, Surah, SurahDetail, SurahNumber};
pub use tafseer::{Tafseer, TafseerEdition};
