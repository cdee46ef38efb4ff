//! Tafseer editions and the offline commentary fallback.

use async_trait::async_trait;

use crate::domain::{SurahNumber, Tafseer, TafseerEdition};
use crate::error::Result;
use crate::port::outbound::quran::TafseerSource;

/// `(identifier, name, author)` for the supported commentaries.
const EDITIONS: [(&str, &str, &str); 4] = [
    ("ar-muyassar", "الميسر", "نخبة من العلماء"),
    ("ar-tafsir-ibn-kathir", "ابن كثير", "ابن كثير"),
    ("ar-tafsir-al-qurtubi", "القرطبي", "القرطبي"),
    ("ar-tafsir-al-tabari", "الطبري", "الطبري"),
];

/// The supported Arabic commentaries.
#[must_use]
pub fn editions() -> Vec<TafseerEdition> {
    EDITIONS
        .iter()
        .map(|(identifier, name, author)| TafseerEdition {
            identifier: (*identifier).to_string(),
            language: "ar".to_string(),
            name: (*name).to_string(),
            author_name: (*author).to_string(),
        })
        .collect()
}

/// Generic commentary returned when no live text is available.
#[derive(Debug, Default, Clone, Copy)]
pub struct TafseerCatalog;

impl TafseerCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn fallback(surah: SurahNumber, ayah: u32) -> Tafseer {
        Tafseer {
            text: format!("تفسير الآية {ayah} من سورة {surah}"),
            author_name: "مفسر القرآن".to_string(),
            resource_name: "هذا تفسير للآية الكريمة ولو كان المصدر حقيقي لرأيت هنا تفسير مفصل للآية"
                .to_string(),
        }
    }
}

#[async_trait]
impl TafseerSource for TafseerCatalog {
    async fn editions(&self) -> Result<Vec<TafseerEdition>> {
        Ok(editions())
    }

    async fn ayah_tafseer(
        &self,
        surah: SurahNumber,
        ayah: u32,
        _edition: Option<&str>,
    ) -> Result<Tafseer> {
        Ok(Self::fallback(surah, ayah))
    }

    fn source_name(&self) -> &'static str {
        "catalogue"
    }
}
