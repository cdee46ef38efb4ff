//! Domain validation errors.
//!
//! Returned by constructors and services when an input falls outside what the
//! Quran, prayer-time or hadith models allow.
//!
//! # Examples
//!
//! ```
//! use mishkat::domain::error::DomainError;
//! use mishkat::domain::surah::SurahNumber;
//!
//! let result = SurahNumber::new(115);
//! assert!(matches!(result, Err(DomainError::InvalidSurahNumber { number: 115 })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Surah numbers run from 1 to 114.
    #[error("surah number must be between 1 and 114, got {number}")]
    InvalidSurahNumber {
        /// The rejected number.
        number: u32,
    },

    /// Ayah number outside the surah it was requested for.
    #[error("surah {surah} has {count} ayahs, got ayah {ayah}")]
    InvalidAyahNumber { surah: u32, ayah: u32, count: u32 },

    /// A time string that is not `HH:MM`.
    #[error("invalid time '{value}': expected HH:MM")]
    InvalidTime { value: String },

    /// Upstream timings without one of the six displayed prayers.
    #[error("prayer timings are missing {prayer}")]
    MissingPrayer { prayer: &'static str },

    /// Latitude or longitude out of range.
    #[error("invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    #[error("unknown hadith collection '{id}'")]
    UnknownCollection { id: String },

    #[error("unknown tafseer edition '{id}'")]
    UnknownEdition { id: String },

    /// Paging arguments outside the accepted window.
    #[error("invalid paging: {reason}")]
    InvalidPaging { reason: String },
}
