//! Surah search with Arabic orthographic normalization.
//!
//! Arabic names in the surah index are fully vocalized (`ٱلْفَاتِحَةِ`) while
//! users type bare letters (`الفاتحه`). Both sides are folded through
//! [`normalize_arabic`] before comparison: diacritics are dropped and letter
//! variants that differ only by hamza seat or final form are merged.

use super::surah::{RevelationType, Surah};

/// Fold Arabic text to a search key.
///
/// Strips tashkeel (U+064B..=U+065F), merges alef variants (ٱ آ أ إ) into
/// bare alef, ؤ into و, ئ and ى into ي, ة into ه, then lowercases whatever
/// Latin text remains.
#[must_use]
pub fn normalize_arabic(text: &str) -> String {
    text.chars()
        .filter(|c| !('\u{064B}'..='\u{065F}').contains(c))
        .map(|c| match c {
            '\u{0671}' | '\u{0622}' | '\u{0623}' | '\u{0625}' => '\u{0627}',
            '\u{0624}' => '\u{0648}',
            '\u{0626}' | '\u{0649}' => '\u{064A}',
            '\u{0629}' => '\u{0647}',
            other => other,
        })
        .collect::<String>()
        .to_lowercase()
}

/// A compiled search term matched against surah metadata.
#[derive(Debug, Clone)]
pub struct SurahQuery {
    raw: String,
    lower: String,
    normalized: String,
}

impl SurahQuery {
    #[must_use]
    pub fn new(term: &str) -> Self {
        let lower = term.to_lowercase();
        Self {
            raw: term.to_string(),
            normalized: normalize_arabic(&lower),
            lower,
        }
    }

    /// True when the query has no effect.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Check a single surah against the query.
    ///
    /// Matches on the Arabic name, English name and translation, the surah
    /// number, or the revelation type (English, or the Arabic مكية / مدنية).
    #[must_use]
    pub fn matches(&self, surah: &Surah) -> bool {
        if self.is_blank() {
            return true;
        }

        normalize_arabic(&surah.name).contains(&self.normalized)
            || surah.english_name.to_lowercase().contains(&self.lower)
            || surah
                .english_name_translation
                .to_lowercase()
                .contains(&self.lower)
            || surah.number.to_string().contains(&self.raw)
            || self.matches_revelation(surah.revelation_type)
    }

    fn matches_revelation(&self, revelation: RevelationType) -> bool {
        let arabic_label = normalize_arabic(revelation.arabic());
        self.normalized == arabic_label
            || revelation.as_str().to_lowercase().contains(&self.lower)
    }

    /// Filter a surah list, preserving order.
    #[must_use]
    pub fn filter<'a>(&self, surahs: &'a [Surah]) -> Vec<&'a Surah> {
        surahs.iter().filter(|s| self.matches(s)).collect()
    }
}
