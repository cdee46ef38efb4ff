//! Application services (use cases).
//!
//! Each service composes outbound ports to serve one area of the app. CLI
//! handlers call these; none of them know about each other.

pub mod bookmark;
pub mod dua;
pub mod hadith;
pub mod prayer;
pub mod quran;
pub mod reflection;
pub mod tafseer;
pub mod tasbih;

pub use bookmark::Bookmarks;
pub use dua::DuaService;
pub use hadith::HadithService;
pub use prayer::{LocationSource, PrayerBoard, PrayerService, ResolvedLocation};
pub use quran::{QuranService, SurahAudio};
pub use reflection::ReflectionService;
pub use tafseer::{TafseerLookup, TafseerService};
pub use tasbih::{Tasbih, TasbihTick};
