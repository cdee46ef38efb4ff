//! Built-in content catalogues.
//!
//! Hadith listings, duas and the tafseer edition list ship with the binary
//! instead of coming from an upstream API. The tafseer catalogue also stands
//! in when the live commentary source is unreachable.

pub mod dua;
pub mod hadith;
pub mod tafseer;

pub use dua::DuaCatalog;
pub use hadith::HadithCatalog;
pub use tafseer::{editions, TafseerCatalog};
