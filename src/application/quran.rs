//! Surah browsing, search and recitation.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::{AyahTimeline, Reciter, Surah, SurahDetail, SurahNumber, SurahQuery};
use crate::error::{Error, Result};
use crate::port::outbound::quran::QuranSource;

/// Where to stream a full-surah recitation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurahAudio {
    pub surah: SurahNumber,
    pub reciter: Reciter,
    pub url: String,
}

pub struct QuranService {
    source: Arc<dyn QuranSource>,
    audio_base_url: String,
    default_reciter: u32,
}

impl QuranService {
    pub fn new(
        source: Arc<dyn QuranSource>,
        audio_base_url: impl Into<String>,
        default_reciter: u32,
    ) -> Self {
        Self {
            source,
            audio_base_url: audio_base_url.into(),
            default_reciter,
        }
    }

    /// The surah index, narrowed by `query` when given.
    pub async fn surahs(&self, query: Option<&str>) -> Result<Vec<Surah>> {
        let surahs = self.source.list_surahs().await?;
        let Some(query) = query.map(SurahQuery::new).filter(|q| !q.is_blank()) else {
            return Ok(surahs);
        };

        let matched: Vec<Surah> = query.filter(&surahs).into_iter().cloned().collect();
        debug!(
            total = surahs.len(),
            matched = matched.len(),
            "Filtered surah index"
        );
        Ok(matched)
    }

    /// Index entry for one surah.
    pub async fn surah_info(&self, number: u32) -> Result<Surah> {
        let number = SurahNumber::new(number)?;
        let surahs = self.source.list_surahs().await?;
        surahs
            .into_iter()
            .find(|s| s.number == number.get())
            .ok_or_else(|| Error::Upstream {
                service: self.source.source_name(),
                message: format!("surah {number} missing from index"),
            })
    }

    /// Full text of one surah.
    pub async fn surah(&self, number: u32) -> Result<SurahDetail> {
        let number = SurahNumber::new(number)?;
        self.source.surah_detail(number).await
    }

    /// Recitation URL; an unknown reciter id falls back to the first reciter.
    pub fn audio(&self, number: u32, reciter: Option<u32>) -> Result<SurahAudio> {
        let surah = SurahNumber::new(number)?;
        let requested = reciter.unwrap_or(self.default_reciter);
        let reciter = Reciter::find(requested).unwrap_or_else(|| {
            warn!(reciter = requested, "Unknown reciter, using default");
            Reciter::find_or_default(requested)
        });

        Ok(SurahAudio {
            surah,
            reciter: *reciter,
            url: reciter.audio_url(&self.audio_base_url, surah),
        })
    }

    /// Estimated ayah start offsets for a recording of `duration_secs`.
    pub fn timeline(&self, number: u32, duration_secs: f64) -> Result<AyahTimeline> {
        let surah = SurahNumber::new(number)?;
        Ok(AyahTimeline::estimate(duration_secs, surah.ayah_count()))
    }
}
