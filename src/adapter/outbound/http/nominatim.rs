//! OpenStreetMap Nominatim reverse geocoding.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use super::{join_url, JsonClient};
use crate::domain::Coordinates;
use crate::error::Result;
use crate::port::outbound::prayer::Geocoder;

#[derive(Debug, Default, Deserialize)]
pub struct ReverseResponse {
    #[serde(default)]
    pub address: Option<AddressDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressDto {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub country: Option<String>,
}

impl ReverseResponse {
    /// `"{city}, {country}"`, or just the country when no settlement is known.
    #[must_use]
    pub fn place_name(self) -> Option<String> {
        let address = self.address?;
        let settlement = address.city.or(address.town).or(address.village);
        match (settlement, address.country) {
            (Some(city), Some(country)) => Some(format!("{city}, {country}")),
            (Some(city), None) => Some(city),
            (None, country) => country,
        }
    }
}

/// Client for `nominatim.openstreetmap.org`.
pub struct NominatimGeocoder {
    http: JsonClient,
    base_url: String,
}

impl NominatimGeocoder {
    #[must_use]
    pub fn new(http: JsonClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn place_name(&self, coordinates: Coordinates) -> Result<Option<String>> {
        let url = join_url(&self.base_url, "reverse");
        info!(url = %url, %coordinates, "Reverse geocoding");

        let query = [
            ("format", "json".to_string()),
            ("lat", coordinates.latitude.to_string()),
            ("lon", coordinates.longitude.to_string()),
            ("accept-language", "ar".to_string()),
        ];
        let response: ReverseResponse = self.http.get_json(&url, &query).await?;
        Ok(response.place_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<String> {
        serde_json::from_str::<ReverseResponse>(body)
            .expect("parse reverse response")
            .place_name()
    }

    #[test]
    fn city_and_country() {
        let body = r#"{"display_name": "...", "address": {"city": "القاهرة", "country": "مصر", "country_code": "eg"}}"#;
        assert_eq!(parse(body).as_deref(), Some("القاهرة, مصر"));
    }

    #[test]
    fn town_or_village_stands_in_for_city() {
        assert_eq!(
            parse(r#"{"address": {"town": "بدر", "country": "السعودية"}}"#).as_deref(),
            Some("بدر, السعودية")
        );
        assert_eq!(
            parse(r#"{"address": {"village": "قرية"}}"#).as_deref(),
            Some("قرية")
        );
    }

    #[test]
    fn country_only() {
        assert_eq!(
            parse(r#"{"address": {"country": "السعودية"}}"#).as_deref(),
            Some("السعودية")
        );
    }

    #[test]
    fn no_address_means_unknown() {
        assert_eq!(parse(r#"{"error": "Unable to geocode"}"#), None);
        assert_eq!(parse(r#"{"address": {}}"#), None);
    }
}
