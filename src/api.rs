use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::WeatherError;
use crate::models::{AirPollution, Coordinates, CurrentWeather, Forecast};

/// Client for the OpenWeatherMap `data/2.5` endpoints
#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: Client,
    base: String,
    api_key: Option<String>,
}

impl WeatherApi {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base: config.api_base.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn is_demo(&self) -> bool {
        self.api_key.is_none()
    }

    /// Makes a GET request for `endpoint` at `coordinates` and deserializes the JSON response.
    ///
    /// Readings come back in metric units with Turkish descriptions.
    async fn make_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        coordinates: Coordinates,
    ) -> Result<T, WeatherError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(WeatherError::DemoMode);
        };

        let url = format!("{}/{}", self.base, endpoint);
        tracing::debug!(
            "GET {} at {}, {}",
            url,
            coordinates.lat,
            coordinates.lon
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
                ("appid", api_key.to_string()),
                ("units", "metric".to_string()),
                ("lang", "tr".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} failed with status {}", endpoint, status);
            return Err(WeatherError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn current(&self, coordinates: Coordinates) -> Result<CurrentWeather, WeatherError> {
        self.make_request("weather", coordinates).await
    }

    pub async fn forecast(&self, coordinates: Coordinates) -> Result<Forecast, WeatherError> {
        self.make_request("forecast", coordinates).await
    }

    pub async fn air_pollution(
        &self,
        coordinates: Coordinates,
    ) -> Result<AirPollution, WeatherError> {
        self.make_request("air_pollution", coordinates).await
    }
}
