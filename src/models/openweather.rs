//! `OpenWeatherMap` API response structures and conversion utilities
//!
//! Every field the dashboard reads is declared here explicitly, with
//! `Option`/default handling in one place instead of presence checks
//! scattered through rendering. Missing numeric readings fall back to zero,
//! a missing condition block falls back to an "Unknown" clear-sky entry.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::weather::{CityWeatherSnapshot, ForecastSample};

/// Current-conditions response from the `/weather` endpoint
#[derive(Debug, Deserialize)]
pub struct CurrentResponse {
    pub name: String,
    pub dt: i64,
    /// Visibility in metres, capped by the service at 10 km
    pub visibility: Option<u32>,
    #[serde(default)]
    pub sys: SysData,
    #[serde(default)]
    pub main: MainData,
    #[serde(default)]
    pub wind: WindData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
}

/// Forecast response from the `/forecast` endpoint: 3-hour samples
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour slot within a forecast response
#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    #[serde(default)]
    pub main: MainData,
    #[serde(default)]
    pub wind: WindData,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
}

/// Country and solar-event block of a current-conditions response
#[derive(Debug, Default, Deserialize)]
pub struct SysData {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Thermal readings block
#[derive(Debug, Default, Deserialize)]
pub struct MainData {
    pub temp: Option<f32>,
    pub feels_like: Option<f32>,
    pub temp_min: Option<f32>,
    pub temp_max: Option<f32>,
    pub humidity: Option<u8>,
    pub pressure: Option<u32>,
}

/// Wind readings block
#[derive(Debug, Default, Deserialize)]
pub struct WindData {
    pub speed: Option<f32>,
}

/// One weather-condition entry; the service sends an array, the dashboard
/// reads the first element
#[derive(Debug, Deserialize)]
pub struct ConditionData {
    pub id: u16,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Fallback used when the condition array is empty or its fields are absent
fn condition_or_default(weather: &[ConditionData]) -> (u16, String, String) {
    match weather.first() {
        Some(condition) => (
            condition.id,
            condition
                .description
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            condition.icon.clone().unwrap_or_else(|| "01d".to_string()),
        ),
        None => (0, "Unknown".to_string(), "01d".to_string()),
    }
}

fn timestamp_or_now(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}

impl CityWeatherSnapshot {
    /// Create a snapshot from a `/weather` response
    #[must_use]
    pub fn from_openweather(response: &CurrentResponse) -> Self {
        let (condition_id, description, icon) = condition_or_default(&response.weather);

        Self {
            city: response.name.clone(),
            country: response.sys.country.clone(),
            temperature: response.main.temp.unwrap_or(0.0),
            feels_like: response.main.feels_like.unwrap_or(0.0),
            temp_min: response.main.temp_min.unwrap_or(0.0),
            temp_max: response.main.temp_max.unwrap_or(0.0),
            humidity: response.main.humidity.unwrap_or(0),
            pressure: response.main.pressure.unwrap_or(0),
            visibility_km: response.visibility.unwrap_or(0) as f32 / 1000.0,
            wind_speed: response.wind.speed.unwrap_or(0.0),
            sunrise: timestamp_or_now(response.sys.sunrise.unwrap_or(0)),
            sunset: timestamp_or_now(response.sys.sunset.unwrap_or(0)),
            condition_id,
            description,
            icon,
        }
    }
}

impl ForecastSample {
    /// Create a sample from one 3-hour forecast slot
    #[must_use]
    pub fn from_openweather(entry: &ForecastEntry) -> Self {
        let (condition_id, description, icon) = condition_or_default(&entry.weather);

        Self {
            timestamp: timestamp_or_now(entry.dt),
            temperature: entry.main.temp.unwrap_or(0.0),
            humidity: entry.main.humidity.unwrap_or(0),
            wind_speed: entry.wind.speed.unwrap_or(0.0),
            condition_id,
            description,
            icon,
        }
    }
}

impl ForecastResponse {
    /// Convert every slot, preserving the order the service delivered
    #[must_use]
    pub fn samples(&self) -> Vec<ForecastSample> {
        self.list.iter().map(ForecastSample::from_openweather).collect()
    }
}
