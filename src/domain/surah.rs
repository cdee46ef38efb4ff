//! Surah and ayah display records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u32 = 114;

/// Ayah count of each surah (Hafs numbering), indexed by `number - 1`.
const AYAH_COUNTS: [u32; SURAH_COUNT as usize] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, 123, 111,
    43, 52, 99, 128, 111, 110, 98, 135, 112, 78, 118, 64,
    77, 227, 93, 88, 69, 60, 34, 30, 73, 54, 45, 83,
    182, 88, 75, 85, 54, 53, 89, 59, 37, 35, 38, 29,
    18, 45, 60, 49, 62, 55, 78, 96, 29, 22, 24, 13,
    14, 11, 11, 18, 12, 12, 30, 52, 52, 44, 28, 28,
    20, 56, 40, 31, 50, 40, 46, 42, 29, 19, 36, 25,
    22, 17, 19, 26, 30, 20, 15, 21, 11, 8, 8, 19,
    5, 8, 8, 11, 11, 8, 3, 9, 5, 4, 7, 3,
    6, 3, 5, 4, 5, 6,
];

/// Validated surah number (1..=114).
///
/// The inner value is private so every construction is range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SurahNumber(u32);

impl SurahNumber {
    /// Create a surah number, rejecting values outside 1..=114.
    pub fn new(number: u32) -> Result<Self, DomainError> {
        if (1..=SURAH_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(DomainError::InvalidSurahNumber { number })
        }
    }

    /// Iterate over every surah number in mushaf order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=SURAH_COUNT).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Number of ayahs in this surah.
    #[must_use]
    pub const fn ayah_count(self) -> u32 {
        AYAH_COUNTS[(self.0 - 1) as usize]
    }

    /// Check that `ayah` exists in this surah.
    pub fn check_ayah(self, ayah: u32) -> Result<u32, DomainError> {
        let count = self.ayah_count();
        if (1..=count).contains(&ayah) {
            Ok(ayah)
        } else {
            Err(DomainError::InvalidAyahNumber {
                surah: self.0,
                ayah,
                count,
            })
        }
    }
}

impl fmt::Display for SurahNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a surah was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl RevelationType {
    /// English label as used by the upstream API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Meccan => "Meccan",
            Self::Medinan => "Medinan",
        }
    }

    /// Arabic label shown next to the surah.
    #[must_use]
    pub const fn arabic(self) -> &'static str {
        match self {
            Self::Meccan => "مكية",
            Self::Medinan => "مدنية",
        }
    }
}

impl fmt::Display for RevelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chapter metadata as listed in the surah index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    /// Arabic name, e.g. `سُورَةُ ٱلْفَاتِحَةِ`.
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: RevelationType,
}

/// A single verse with its mushaf position metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ayah {
    /// Global ayah number across the whole Quran.
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    pub juz: u32,
    pub manzil: u32,
    pub page: u32,
    pub ruku: u32,
    pub hizb_quarter: u32,
    pub sajda: bool,
}

/// A surah together with the text of all of its ayahs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurahDetail {
    #[serde(flatten)]
    pub surah: Surah,
    pub ayahs: Vec<Ayah>,
}

impl SurahDetail {
    /// Ayahs whose in-surah number falls within `from..=to`.
    ///
    /// Bounds are clamped to the surah, so an open range returns everything.
    pub fn ayah_range(&self, from: Option<u32>, to: Option<u32>) -> &[Ayah] {
        let len = self.ayahs.len();
        let start = from.map_or(0, |f| f.saturating_sub(1) as usize).min(len);
        let end = to.map_or(len, |t| t as usize).clamp(start, len);
        &self.ayahs[start..end]
    }

    /// Look up a single ayah by its in-surah number.
    pub fn ayah(&self, number_in_surah: u32) -> Result<&Ayah, DomainError> {
        self.ayahs
            .iter()
            .find(|a| a.number_in_surah == number_in_surah)
            .ok_or(DomainError::InvalidAyahNumber {
                surah: self.surah.number,
                ayah: number_in_surah,
                count: self.surah.number_of_ayahs,
            })
    }
}
