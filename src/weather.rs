//! Upstream weather service access
//!
//! This module provides the transport seam (`WeatherSource`) and the HTTP
//! client for the OpenWeatherMap endpoints the dashboard consumes: current
//! conditions by city name and the 3-hour-interval multi-day forecast, both
//! parameterized by unit system and an API credential.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::SkycastError;
use crate::models::openweather::{CurrentResponse, ForecastResponse};
use crate::models::{CityWeatherSnapshot, ForecastSample, UnitSystem};

/// Seam over the upstream transport.
///
/// The dashboard orchestration talks to this trait, never to a concrete
/// client, so tests can substitute an in-memory source and observe exactly
/// which requests were issued.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Whether a usable credential is configured. A `false` here lets the
    /// background refresh skip its fan-out without issuing a single request.
    fn has_credential(&self) -> bool {
        true
    }

    /// Fetch current conditions for a named city
    async fn current_weather(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CityWeatherSnapshot, SkycastError>;

    /// Fetch the raw 3-hour forecast series for a named city
    async fn forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, SkycastError>;
}

/// HTTP client for the OpenWeatherMap API
pub struct OpenWeatherClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    /// Create a new client from the weather section of the configuration
    pub fn new(config: &WeatherConfig) -> Result<Self, SkycastError> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkycastError::api(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
        })
    }

    /// The configured credential, or a configuration error before any
    /// request is built
    fn key(&self) -> Result<&str, SkycastError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| SkycastError::config("No OpenWeatherMap API key configured"))
    }

    /// Issue one GET request and parse the JSON payload. Single attempt:
    /// failures map straight into the error taxonomy, no retry.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        city: &str,
    ) -> Result<T, SkycastError> {
        debug!(
            "request URL: {}",
            url.split("appid=").next().unwrap_or(url.as_str())
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SkycastError::api(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            warn!("API credential rejected (HTTP 401)");
            Err(SkycastError::config(
                "The weather service rejected the configured API key",
            ))
        } else if status == StatusCode::NOT_FOUND {
            info!("city '{city}' not found (HTTP 404)");
            Err(SkycastError::city_not_found(city))
        } else if !status.is_success() {
            Err(SkycastError::api(format!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            )))
        } else {
            response
                .json()
                .await
                .map_err(|e| SkycastError::api(format!("Invalid payload from API: {e}")))
        }
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    #[instrument(skip(self))]
    async fn current_weather(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CityWeatherSnapshot, SkycastError> {
        let url = format!(
            "{}/weather?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            units.as_query_param(),
            self.key()?
        );

        let response: CurrentResponse = self.get_json(url, city).await?;
        let snapshot = CityWeatherSnapshot::from_openweather(&response);
        info!("current conditions for {}: {}", snapshot.city, snapshot.description);
        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, SkycastError> {
        let url = format!(
            "{}/forecast?q={}&units={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            units.as_query_param(),
            self.key()?
        );

        let response: ForecastResponse = self.get_json(url, city).await?;
        let samples = response.samples();
        info!("retrieved {} forecast samples for {city}", samples.len());
        Ok(samples)
    }
}
