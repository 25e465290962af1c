//! Dashboard orchestration: single-city lookup and the tracked-city merge
//!
//! Both operations are pure over their inputs aside from the transport: no
//! state is owned here, results flow straight to the caller.

use chrono::TimeZone;
use futures::future;
use serde::Serialize;
use tracing::warn;

use crate::error::SkycastError;
use crate::forecast::{DailyForecast, reduce_to_daily_forecast};
use crate::models::{CityWeatherSnapshot, UnitSystem};
use crate::weather::WeatherSource;

/// Current conditions and the reduced daily forecast for one city.
///
/// The two halves are an atomic pair for display purposes: a lookup either
/// yields both or fails as a whole.
#[derive(Debug, Clone, Serialize)]
pub struct CityLookup {
    pub snapshot: CityWeatherSnapshot,
    pub daily: DailyForecast,
}

/// Look up one city: current conditions first, then the forecast.
///
/// The forecast request is only issued after current conditions succeed,
/// keyed by the same city name and unit system. Any failure along the way
/// surfaces as one error; no partial result escapes.
pub async fn lookup<S, Tz>(
    source: &S,
    city: &str,
    units: UnitSystem,
    tz: &Tz,
) -> Result<CityLookup, SkycastError>
where
    S: WeatherSource + ?Sized,
    Tz: TimeZone,
{
    let snapshot = source.current_weather(city, units).await?;
    let samples = source.forecast(city, units).await?;
    let daily = reduce_to_daily_forecast(&samples, tz);

    Ok(CityLookup { snapshot, daily })
}

/// Fetch current conditions for every tracked city and keep the successes.
///
/// One independent request per city, all issued concurrently; the merge
/// completes only once every request has settled. A failing city is logged
/// and omitted without aborting its siblings, and the output preserves the
/// relative input order of the cities that succeeded.
///
/// With no credential configured this short-circuits to an empty result
/// before issuing any request — the background refresh degrades silently,
/// unlike the primary lookup which surfaces the condition.
pub async fn fetch_all<S>(
    source: &S,
    cities: &[String],
    units: UnitSystem,
) -> Vec<CityWeatherSnapshot>
where
    S: WeatherSource + ?Sized,
{
    if !source.has_credential() {
        warn!("skipping tracked-city refresh: no API credential configured");
        return Vec::new();
    }

    let requests = cities.iter().map(|city| source.current_weather(city, units));
    let results = future::join_all(requests).await;

    cities
        .iter()
        .zip(results)
        .filter_map(|(city, result)| match result {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("dropping {city} from the dashboard: {e}");
                None
            }
        })
        .collect()
}
