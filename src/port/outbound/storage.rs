//! Local key-value storage port.
//!
//! Values are plain strings; structured values (favorites) are JSON encoded
//! by the caller. Keys in use:
//!
//! - [`FAVORITES_KEY`] - JSON array of favorite surahs
//! - [`note_key`] - `notes-surah-{n}`, free text
//! - [`TASBIH_KEY`] - decimal counter

use crate::error::Result;

pub const FAVORITES_KEY: &str = "favorites";
pub const TASBIH_KEY: &str = "tasbihCount";

const NOTE_PREFIX: &str = "notes-surah-";

/// Storage key for the note attached to surah `number`.
#[must_use]
pub fn note_key(number: u32) -> String {
    format!("{NOTE_PREFIX}{number}")
}

/// Surah number of a note key, if `key` is one.
#[must_use]
pub fn parse_note_key(key: &str) -> Option<u32> {
    key.strip_prefix(NOTE_PREFIX)?.parse().ok()
}

/// String-to-string persistent map.
///
/// Implementations must be thread-safe (`Send + Sync`); each mutation is
/// persisted before returning.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}
