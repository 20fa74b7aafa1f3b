//! Client for the remote city store.
//!
//! The store speaks plain JSON over REST:
//! `GET /cities`, `GET /cities/{id}`, `POST /cities` and `DELETE /cities/{id}`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared_types::{City, NewCity};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CityApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CityApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Remote operations the city store depends on.
///
/// Futures are `?Send` because in the browser they are driven by `fetch` promises.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait CityApi: Send + Sync {
    async fn list_cities(&self) -> Result<Vec<City>, CityApiError>;
    async fn get_city(&self, id: &str) -> Result<City, CityApiError>;
    async fn create_city(&self, draft: &NewCity) -> Result<City, CityApiError>;
    async fn delete_city(&self, id: &str) -> Result<(), CityApiError>;
}

pub struct HttpCityApi {
    client: Client,
    base_url: String,
}

impl HttpCityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn cities_url(&self) -> String {
        format!("{}/cities", self.base_url)
    }

    fn city_url(&self, id: &str) -> String {
        format!("{}/cities/{}", self.base_url, urlencoding::encode(id))
    }
}

fn ensure_success(response: Response) -> Result<Response, CityApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(CityApiError::Status(status.as_u16()))
    }
}

#[async_trait(?Send)]
impl CityApi for HttpCityApi {
    async fn list_cities(&self) -> Result<Vec<City>, CityApiError> {
        let response = self.client.get(self.cities_url()).send().await?;
        Ok(ensure_success(response)?.json::<Vec<City>>().await?)
    }

    async fn get_city(&self, id: &str) -> Result<City, CityApiError> {
        let response = self.client.get(self.city_url(id)).send().await?;
        Ok(ensure_success(response)?.json::<City>().await?)
    }

    async fn create_city(&self, draft: &NewCity) -> Result<City, CityApiError> {
        let response = self
            .client
            .post(self.cities_url())
            .json(draft)
            .send()
            .await?;
        Ok(ensure_success(response)?.json::<City>().await?)
    }

    async fn delete_city(&self, id: &str) -> Result<(), CityApiError> {
        let response = self.client.delete(self.city_url(id)).send().await?;
        ensure_success(response).map(|_| ())
    }
}
