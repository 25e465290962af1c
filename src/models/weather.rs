//! Weather data models and display methods

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::units::UnitSystem;

/// One raw 3-hour forecast entry as delivered by the upstream service.
///
/// Immutable once received; the daily reducer selects between samples but
/// never rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSample {
    /// Timestamp for this forecast slot
    pub timestamp: DateTime<Utc>,
    /// Temperature in the unit system of the request
    pub temperature: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Wind speed in the unit system of the request
    pub wind_speed: f32,
    /// Upstream weather-condition code
    pub condition_id: u16,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon ID from the API (e.g. "10d")
    pub icon: String,
}

/// Current conditions for one named city.
///
/// Treated as a read-only value once fetched; a new fetch replaces the whole
/// snapshot, nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityWeatherSnapshot {
    /// City name as resolved by the upstream service
    pub city: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: Option<String>,
    /// Current temperature
    pub temperature: f32,
    /// Perceived temperature
    pub feels_like: f32,
    /// Daily minimum temperature
    pub temp_min: f32,
    /// Daily maximum temperature
    pub temp_max: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Visibility in kilometres
    pub visibility_km: f32,
    /// Wind speed in the unit system of the request
    pub wind_speed: f32,
    /// Sunrise at the city
    pub sunrise: DateTime<Utc>,
    /// Sunset at the city
    pub sunset: DateTime<Utc>,
    /// Upstream weather-condition code
    pub condition_id: u16,
    /// Human-readable description of weather conditions
    pub description: String,
    /// Weather condition icon ID from the API
    pub icon: String,
}

impl CityWeatherSnapshot {
    /// Whether `at` falls between this city's sunrise and sunset
    #[must_use]
    pub fn is_daytime_at(&self, at: DateTime<Utc>) -> bool {
        at > self.sunrise && at < self.sunset
    }

    /// Icon URL on the upstream CDN
    #[must_use]
    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.icon)
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self, units: UnitSystem) -> String {
        format!("{:.0}{}", self.temperature, units.temperature_symbol())
    }

    /// Format wind information
    #[must_use]
    pub fn format_wind(&self, units: UnitSystem) -> String {
        format!("{:.0} {}", self.wind_speed, units.wind_speed_unit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn snapshot() -> CityWeatherSnapshot {
        CityWeatherSnapshot {
            city: "London".to_string(),
            country: Some("GB".to_string()),
            temperature: 17.4,
            feels_like: 16.9,
            temp_min: 14.0,
            temp_max: 19.2,
            humidity: 63,
            pressure: 1016,
            visibility_km: 10.0,
            wind_speed: 4.1,
            sunrise: Utc.with_ymd_and_hms(2024, 6, 1, 3, 50, 0).unwrap(),
            sunset: Utc.with_ymd_and_hms(2024, 6, 1, 20, 5, 0).unwrap(),
            condition_id: 803,
            description: "broken clouds".to_string(),
            icon: "04d".to_string(),
        }
    }

    #[test]
    fn test_daytime_window() {
        let snap = snapshot();
        let noon = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        assert!(snap.is_daytime_at(noon));
        assert!(!snap.is_daytime_at(midnight));
    }

    #[test]
    fn test_display_formatting() {
        let snap = snapshot();
        assert_eq!(snap.format_temperature(UnitSystem::Metric), "17°C");
        assert_eq!(snap.format_wind(UnitSystem::Metric), "4 m/s");
        assert!(snap.icon_url().contains("04d"));
    }
}
