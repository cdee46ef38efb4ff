//! Verse commentary with an offline fallback.

use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::{SurahNumber, Tafseer, TafseerEdition};
use crate::error::Result;
use crate::port::outbound::quran::TafseerSource;

/// A commentary together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TafseerLookup {
    pub surah: u32,
    pub ayah: u32,
    pub edition: String,
    #[serde(flatten)]
    pub tafseer: Tafseer,
    pub source: &'static str,
    /// The live source failed and placeholder text was served.
    pub fallback: bool,
}

pub struct TafseerService {
    live: Arc<dyn TafseerSource>,
    fallback: Arc<dyn TafseerSource>,
    default_edition: String,
}

impl TafseerService {
    pub fn new(
        live: Arc<dyn TafseerSource>,
        fallback: Arc<dyn TafseerSource>,
        default_edition: impl Into<String>,
    ) -> Self {
        Self {
            live,
            fallback,
            default_edition: default_edition.into(),
        }
    }

    pub async fn editions(&self) -> Result<Vec<TafseerEdition>> {
        match self.live.editions().await {
            Ok(editions) => Ok(editions),
            Err(err) => {
                warn!(
                    source = self.live.source_name(),
                    error = %err,
                    "Tafseer editions unavailable, using catalogue"
                );
                self.fallback.editions().await
            }
        }
    }

    /// Commentary on `surah:ayah`.
    ///
    /// The reference and edition are validated up front; after that a live
    /// failure is logged and answered from the fallback source.
    pub async fn tafseer(
        &self,
        surah: u32,
        ayah: u32,
        edition: Option<&str>,
    ) -> Result<TafseerLookup> {
        let number = SurahNumber::new(surah)?;
        let ayah = number.check_ayah(ayah)?;
        let edition = edition.unwrap_or(&self.default_edition).to_string();
        if !self
            .editions()
            .await?
            .iter()
            .any(|e| e.identifier == edition)
        {
            return Err(DomainError::UnknownEdition { id: edition }.into());
        }

        match self.live.ayah_tafseer(number, ayah, Some(&edition)).await {
            Ok(tafseer) => Ok(TafseerLookup {
                surah,
                ayah,
                edition,
                tafseer,
                source: self.live.source_name(),
                fallback: false,
            }),
            Err(err) => {
                warn!(
                    source = self.live.source_name(),
                    surah,
                    ayah,
                    error = %err,
                    "Tafseer fetch failed, serving fallback"
                );
                let tafseer = self
                    .fallback
                    .ayah_tafseer(number, ayah, Some(&edition))
                    .await?;
                Ok(TafseerLookup {
                    surah,
                    ayah,
                    edition,
                    tafseer,
                    source: self.fallback.source_name(),
                    fallback: true,
                })
            }
        }
    }
}
