//! Reciters, surah audio URLs and per-ayah seek estimates.

use serde::Serialize;

use super::surah::SurahNumber;

/// A Quran reciter available on the audio server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reciter {
    pub id: u32,
    pub name: &'static str,
    /// Directory name on the audio server.
    pub identifier: &'static str,
}

/// Reciters in menu order; the first is the default.
pub const RECITERS: [Reciter; 5] = [
    Reciter {
        id: 1,
        name: "عبد الباسط عبد الصمد",
        identifier: "abdulbasit_abdulsamad_mujawwad",
    },
    Reciter {
        id: 2,
        name: "محمود خليل الحصري",
        identifier: "mahmoud_khalil_al-husary",
    },
    Reciter {
        id: 3,
        name: "محمد صديق المنشاوي",
        identifier: "muhammad_siddiq_al-minshawi",
    },
    Reciter {
        id: 4,
        name: "ماهر المعيقلي",
        identifier: "maher_al-muaiqly",
    },
    Reciter {
        id: 5,
        name: "مشاري راشد العفاسي",
        identifier: "mishari_rashid_al-afasy",
    },
];

impl Reciter {
    /// Look up a reciter by id.
    #[must_use]
    pub fn find(id: u32) -> Option<&'static Reciter> {
        RECITERS.iter().find(|r| r.id == id)
    }

    /// Look up a reciter, falling back to the default one.
    #[must_use]
    pub fn find_or_default(id: u32) -> &'static Reciter {
        Self::find(id).unwrap_or(&RECITERS[0])
    }

    /// Full-surah MP3 location: `{base}/{identifier}/{NNN}.mp3`.
    #[must_use]
    pub fn audio_url(&self, base_url: &str, surah: SurahNumber) -> String {
        format!(
            "{}/{}/{:03}.mp3",
            base_url.trim_end_matches('/'),
            self.identifier,
            surah.get()
        )
    }
}

/// Estimated start offsets of each ayah inside a full-surah recording.
///
/// Real per-ayah timestamps are not published by the audio server, so the
/// recording is split evenly by ayah count.
#[derive(Debug, Clone, PartialEq)]
pub struct AyahTimeline {
    starts: Vec<f64>,
}

impl AyahTimeline {
    /// Split `duration_secs` evenly across `ayah_count` ayahs.
    #[must_use]
    pub fn estimate(duration_secs: f64, ayah_count: u32) -> Self {
        if ayah_count == 0 || !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Self { starts: Vec::new() };
        }
        let average = duration_secs / f64::from(ayah_count);
        let starts = (0..ayah_count).map(|i| f64::from(i) * average).collect();
        Self { starts }
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        u32::try_from(self.starts.len()).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Ayah (1-based) playing at `position_secs`.
    ///
    /// Returns 1 for an empty timeline or a position before the first start.
    #[must_use]
    pub fn ayah_at(&self, position_secs: f64) -> u32 {
        self.starts
            .iter()
            .rposition(|start| position_secs >= *start)
            .map_or(1, |i| u32::try_from(i + 1).unwrap_or(u32::MAX))
    }

    /// Seek offset for a 1-based ayah, clamped to the timeline.
    #[must_use]
    pub fn start_of(&self, ayah: u32) -> f64 {
        let index = (ayah.max(1) - 1) as usize;
        self.starts
            .get(index.min(self.starts.len().saturating_sub(1)))
            .copied()
            .unwrap_or(0.0)
    }

    /// The ayah before `current`, never below 1.
    #[must_use]
    pub fn previous(&self, current: u32) -> u32 {
        current.saturating_sub(1).max(1)
    }

    /// The ayah after `current`, never past the last one.
    #[must_use]
    pub fn next(&self, current: u32) -> u32 {
        (current + 1).min(self.len().max(1))
    }
}
