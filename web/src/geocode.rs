//! Reverse geocoding for the new-city form.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use shared_types::Position;
use thiserror::Error;

use crate::utils::flag::flag_emoji;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    #[error("That doesn't seem to be a city. Click somewhere else 😉")]
    NotACity,
    #[error("Could not look up this place: {0}")]
    Request(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// The parts of a place the form pre-fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub city_name: String,
    pub country: String,
    pub emoji: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReverseGeocodeResponse {
    #[serde(default)]
    city: String,
    #[serde(default)]
    locality: String,
    #[serde(default)]
    country_name: String,
    #[serde(default)]
    country_code: String,
}

impl TryFrom<ReverseGeocodeResponse> for Place {
    type Error = GeocodeError;

    fn try_from(response: ReverseGeocodeResponse) -> Result<Self, Self::Error> {
        let emoji = flag_emoji(&response.country_code).ok_or(GeocodeError::NotACity)?;
        let city_name = if response.city.is_empty() {
            response.locality
        } else {
            response.city
        };
        Ok(Self {
            city_name,
            country: response.country_name,
            emoji,
        })
    }
}

#[async_trait(?Send)]
pub trait ReverseGeocoder: Send + Sync {
    async fn place_at(&self, position: Position) -> Result<Place, GeocodeError>;
}

pub struct HttpReverseGeocoder {
    client: Client,
    endpoint: String,
}

impl HttpReverseGeocoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl ReverseGeocoder for HttpReverseGeocoder {
    async fn place_at(&self, position: Position) -> Result<Place, GeocodeError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("latitude", position.lat), ("longitude", position.lng)])
            .send()
            .await?
            .error_for_status()?
            .json::<ReverseGeocodeResponse>()
            .await?;
        Place::try_from(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Place, GeocodeError> {
        Place::try_from(serde_json::from_str::<ReverseGeocodeResponse>(body).unwrap())
    }

    #[test]
    fn prefers_city_over_locality() {
        let place = parse(
            r#"{"city": "Lisbon", "locality": "Santa Maria Maior",
                "countryName": "Portugal", "countryCode": "PT"}"#,
        )
        .unwrap();

        assert_eq!(
            place,
            Place {
                city_name: "Lisbon".to_string(),
                country: "Portugal".to_string(),
                emoji: "🇵🇹".to_string(),
            }
        );
    }

    #[test]
    fn falls_back_to_locality() {
        let place = parse(
            r#"{"city": "", "locality": "Hallstatt", "countryName": "Austria", "countryCode": "AT"}"#,
        )
        .unwrap();

        assert_eq!(place.city_name, "Hallstatt");
        assert_eq!(place.emoji, "🇦🇹");
    }

    #[test]
    fn open_sea_is_not_a_city() {
        let err = parse(r#"{"city": "", "locality": "Atlantic Ocean", "countryCode": ""}"#)
            .unwrap_err();

        assert_eq!(err, GeocodeError::NotACity);
        assert_eq!(
            err.to_string(),
            "That doesn't seem to be a city. Click somewhere else 😉"
        );
    }
}
