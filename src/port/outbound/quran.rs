//! Quran text and tafseer source ports.

use async_trait::async_trait;

use crate::domain::{Surah, SurahDetail, SurahNumber, Tafseer, TafseerEdition};
use crate::error::Result;

/// Source of the surah index and surah text.
#[async_trait]
pub trait QuranSource: Send + Sync {
    /// Metadata for all 114 surahs in mushaf order.
    async fn list_surahs(&self) -> Result<Vec<Surah>>;

    /// A surah with the text of every ayah.
    async fn surah_detail(&self, number: SurahNumber) -> Result<SurahDetail>;

    /// Name used in logs and diagnostics.
    fn source_name(&self) -> &'static str;
}

/// Source of verse commentary.
#[async_trait]
pub trait TafseerSource: Send + Sync {
    /// Commentaries this source can serve.
    async fn editions(&self) -> Result<Vec<TafseerEdition>>;

    /// Commentary on one ayah; `edition` selects a commentary by identifier,
    /// `None` uses the source default.
    async fn ayah_tafseer(
        &self,
        surah: SurahNumber,
        ayah: u32,
        edition: Option<&str>,
    ) -> Result<Tafseer>;

    fn source_name(&self) -> &'static str;
}
