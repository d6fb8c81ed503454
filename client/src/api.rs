//! REST client for the city endpoints

use reqwest::{Client, Response};
use shared::{City, CityId, CityReadings, CitySummary, NewCity};

use crate::error::{ClientError, ClientResult};

/// Typed access to `/mesta` and `/mesto`
#[derive(Clone)]
pub struct CityApi {
    client: Client,
    base_url: String,
}

impl CityApi {
    /// Create a client for the API rooted at `base_url` (e.g. `http://localhost:3000/api`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full city collection
    pub async fn list_cities(&self) -> ClientResult<Vec<CitySummary>> {
        let url = self.url("/mesta");
        tracing::debug!(%url, "Fetching cities");

        let response = self.client.get(&url).send().await?;
        let cities = ensure_success(response).await?.json().await?;
        Ok(cities)
    }

    /// Fetch one city with its readings
    pub async fn get_city(&self, id: CityId) -> ClientResult<City> {
        let url = self.url(&format!("/mesto/{}", id));
        tracing::debug!(%url, "Fetching city");

        let response = self.client.get(&url).send().await?;
        let city = ensure_success(response).await?.json().await?;
        Ok(city)
    }

    /// Submit a new city. The response body is not needed.
    pub async fn create_city(&self, city: &NewCity) -> ClientResult<()> {
        let url = self.url("/mesto");
        tracing::debug!(%url, nazov = %city.nazov, "Creating city");

        let response = self.client.post(&url).json(city).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Replace the readings of city `id`
    pub async fn update_city(&self, id: CityId, readings: &CityReadings) -> ClientResult<()> {
        let url = self.url(&format!("/mesto/{}", id));
        tracing::debug!(%url, "Updating city");

        let response = self.client.put(&url).json(readings).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    pub async fn delete_city(&self, id: CityId) -> ClientResult<()> {
        let url = self.url(&format!("/mesto/{}", id));
        tracing::debug!(%url, "Deleting city");

        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
