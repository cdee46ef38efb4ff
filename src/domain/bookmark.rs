//! Favorite surahs and per-surah notes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::surah::Surah;

/// Characters of a note shown in listings.
pub const NOTE_PREVIEW_CHARS: usize = 150;

/// A bookmarked surah.
///
/// Stored as camelCase JSON so existing `favorites` values keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSurah {
    pub surah_number: u32,
    pub name: String,
    pub english_name: String,
    pub number_of_ayahs: u32,
    pub added_at: DateTime<Utc>,
}

impl FavoriteSurah {
    #[must_use]
    pub fn from_surah(surah: &Surah, added_at: DateTime<Utc>) -> Self {
        Self {
            surah_number: surah.number,
            name: surah.name.clone(),
            english_name: surah.english_name.clone(),
            number_of_ayahs: surah.number_of_ayahs,
            added_at,
        }
    }
}

/// Free-text note attached to a surah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahNote {
    pub surah_number: u32,
    pub content: String,
}

impl SurahNote {
    /// First [`NOTE_PREVIEW_CHARS`] characters, with `...` when cut.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.content.chars().count() > NOTE_PREVIEW_CHARS {
            let cut: String = self.content.chars().take(NOTE_PREVIEW_CHARS).collect();
            format!("{cut}...")
        } else {
            self.content.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::surah::RevelationType;
    use crate::testkit::domain::surah;

    #[test]
    fn favorite_copies_surah_fields() {
        let fatiha = surah(1, "الفاتحة", "Al-Faatiha", "The Opening", RevelationType::Meccan);
        let now = Utc::now();
        let favorite = FavoriteSurah::from_surah(&fatiha, now);

        assert_eq!(favorite.surah_number, 1);
        assert_eq!(favorite.name, "الفاتحة");
        assert_eq!(favorite.number_of_ayahs, fatiha.number_of_ayahs);
        assert_eq!(favorite.added_at, now);
    }

    #[test]
    fn favorite_serializes_camel_case() {
        let json = r#"[{"surahNumber":36,"name":"يس","englishName":"Yaseen","numberOfAyahs":83,"addedAt":"2024-03-01T10:00:00.000Z"}]"#;
        let favorites: Vec<FavoriteSurah> = serde_json::from_str(json).expect("parse favorites");

        assert_eq!(favorites[0].surah_number, 36);
        assert_eq!(favorites[0].english_name, "Yaseen");

        let back = serde_json::to_string(&favorites[0]).expect("serialize favorite");
        assert!(back.contains("\"surahNumber\":36"));
    }

    #[test]
    fn short_note_preview_is_unchanged() {
        let note = SurahNote {
            surah_number: 1,
            content: "تأمل".into(),
        };
        assert_eq!(note.preview(), "تأمل");
    }

    #[test]
    fn long_note_preview_is_cut_on_characters() {
        let note = SurahNote {
            surah_number: 1,
            content: "ن".repeat(200),
        };
        let preview = note.preview();
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), NOTE_PREVIEW_CHARS + 3);
    }
}
