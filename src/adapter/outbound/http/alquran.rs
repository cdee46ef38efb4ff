//! alquran.cloud client: surah index and surah text.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use super::{join_url, JsonClient};
use crate::domain::{Ayah, RevelationType, Surah, SurahDetail, SurahNumber};
use crate::error::{Error, Result};
use crate::port::outbound::quran::QuranSource;

/// Response envelope used by every alquran.cloud endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    fn into_data(self) -> Result<T> {
        if self.code == 200 {
            Ok(self.data)
        } else {
            Err(Error::Upstream {
                service: "alquran.cloud",
                message: format!("{} {}", self.code, self.status),
            })
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurahDto {
    pub number: u32,
    pub name: String,
    pub english_name: String,
    pub english_name_translation: String,
    pub number_of_ayahs: u32,
    pub revelation_type: RevelationType,
}

impl From<SurahDto> for Surah {
    fn from(dto: SurahDto) -> Self {
        Self {
            number: dto.number,
            name: dto.name,
            english_name: dto.english_name,
            english_name_translation: dto.english_name_translation,
            number_of_ayahs: dto.number_of_ayahs,
            revelation_type: dto.revelation_type,
        }
    }
}

/// `sajda` is `false`, or an object describing the prostration.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SajdaDto {
    Flag(bool),
    Detail(serde_json::Value),
}

impl SajdaDto {
    fn is_sajda(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Detail(_) => true,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AyahDto {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    pub juz: u32,
    pub manzil: u32,
    pub page: u32,
    pub ruku: u32,
    pub hizb_quarter: u32,
    pub sajda: SajdaDto,
}

impl From<AyahDto> for Ayah {
    fn from(dto: AyahDto) -> Self {
        Self {
            sajda: dto.sajda.is_sajda(),
            number: dto.number,
            text: dto.text,
            number_in_surah: dto.number_in_surah,
            juz: dto.juz,
            manzil: dto.manzil,
            page: dto.page,
            ruku: dto.ruku,
            hizb_quarter: dto.hizb_quarter,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SurahDetailDto {
    #[serde(flatten)]
    pub surah: SurahDto,
    pub ayahs: Vec<AyahDto>,
}

impl From<SurahDetailDto> for SurahDetail {
    fn from(dto: SurahDetailDto) -> Self {
        Self {
            surah: dto.surah.into(),
            ayahs: dto.ayahs.into_iter().map(Ayah::from).collect(),
        }
    }
}

/// Client for `api.alquran.cloud`.
pub struct AlQuranClient {
    http: JsonClient,
    base_url: String,
    edition: String,
}

impl AlQuranClient {
    #[must_use]
    pub fn new(http: JsonClient, base_url: impl Into<String>, edition: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            edition: edition.into(),
        }
    }
}

#[async_trait]
impl QuranSource for AlQuranClient {
    async fn list_surahs(&self) -> Result<Vec<Surah>> {
        let url = join_url(&self.base_url, "surah");
        info!(url = %url, "Fetching surah index");

        let envelope: Envelope<Vec<SurahDto>> = self.http.get_json(&url, &[]).await?;
        let surahs: Vec<Surah> = envelope
            .into_data()?
            .into_iter()
            .map(Surah::from)
            .collect();
        debug!(count = surahs.len(), "Fetched surahs");

        Ok(surahs)
    }

    async fn surah_detail(&self, number: SurahNumber) -> Result<SurahDetail> {
        let url = join_url(&self.base_url, &format!("surah/{number}/{}", self.edition));
        info!(url = %url, "Fetching surah text");

        let envelope: Envelope<SurahDetailDto> = self.http.get_json(&url, &[]).await?;
        let detail = SurahDetail::from(envelope.into_data()?);
        debug!(ayahs = detail.ayahs.len(), "Fetched surah");

        Ok(detail)
    }

    fn source_name(&self) -> &'static str {
        "alquran.cloud"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": [
            {"number": 1, "name": "سُورَةُ ٱلْفَاتِحَةِ", "englishName": "Al-Faatiha",
             "englishNameTranslation": "The Opening", "numberOfAyahs": 7, "revelationType": "Meccan"},
            {"number": 2, "name": "سُورَةُ البَقَرَةِ", "englishName": "Al-Baqara",
             "englishNameTranslation": "The Cow", "numberOfAyahs": 286, "revelationType": "Medinan"}
        ]
    }"#;

    const DETAIL: &str = r#"{
        "code": 200,
        "status": "OK",
        "data": {
            "number": 32, "name": "سُورَةُ السَّجۡدَةِ", "englishName": "As-Sajda",
            "englishNameTranslation": "The Prostration", "revelationType": "Meccan",
            "numberOfAyahs": 30,
            "edition": {"identifier": "ar.alafasy"},
            "ayahs": [
                {"number": 3503, "audio": "https://cdn.test/3503.mp3", "text": "الٓمٓ",
                 "numberInSurah": 1, "juz": 21, "manzil": 5, "page": 415, "ruku": 357,
                 "hizbQuarter": 165, "sajda": false},
                {"number": 3517, "text": "إِنَّمَا يُؤۡمِنُ بِـَٔايَٰتِنَا",
                 "numberInSurah": 15, "juz": 21, "manzil": 5, "page": 416, "ruku": 359,
                 "hizbQuarter": 166, "sajda": {"id": 9, "recommended": true, "obligatory": false}}
            ]
        }
    }"#;

    #[test]
    fn index_envelope_converts_to_surahs() {
        let envelope: Envelope<Vec<SurahDto>> = serde_json::from_str(INDEX).expect("parse index");
        let surahs: Vec<Surah> = envelope
            .into_data()
            .expect("ok envelope")
            .into_iter()
            .map(Surah::from)
            .collect();

        assert_eq!(surahs.len(), 2);
        assert_eq!(surahs[0].english_name, "Al-Faatiha");
        assert_eq!(surahs[1].revelation_type, RevelationType::Medinan);
        assert_eq!(surahs[1].number_of_ayahs, 286);
    }

    #[test]
    fn detail_envelope_reads_sajda_objects() {
        let envelope: Envelope<SurahDetailDto> =
            serde_json::from_str(DETAIL).expect("parse detail");
        let detail = SurahDetail::from(envelope.into_data().expect("ok envelope"));

        assert_eq!(detail.surah.number, 32);
        assert_eq!(detail.ayahs.len(), 2);
        assert!(!detail.ayahs[0].sajda);
        assert!(detail.ayahs[1].sajda);
        assert_eq!(detail.ayahs[1].number_in_surah, 15);
    }

    #[test]
    fn non_200_envelope_is_upstream_error() {
        let envelope: Envelope<Vec<SurahDto>> =
            serde_json::from_str(r#"{"code": 404, "status": "NOT FOUND", "data": []}"#)
                .expect("parse envelope");

        match envelope.into_data() {
            Err(Error::Upstream { service, message }) => {
                assert_eq!(service, "alquran.cloud");
                assert!(message.contains("404"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }
}
