//! Integration tests for the dashboard orchestration: single-city lookup,
//! the tracked-city merge and the session-state transitions, driven through
//! an in-memory weather source that records every transport call.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use rstest::rstest;

use skycast::state::DashboardState;
use skycast::store::TrackedCities;
use skycast::{
    CityWeatherSnapshot, ForecastSample, MAX_FORECAST_DAYS, SkycastError, UnitSystem,
    WeatherSource, dashboard,
};

fn snapshot(city: &str) -> CityWeatherSnapshot {
    CityWeatherSnapshot {
        city: city.to_string(),
        country: Some("XX".to_string()),
        temperature: 20.0,
        feels_like: 19.5,
        temp_min: 17.0,
        temp_max: 24.0,
        humidity: 55,
        pressure: 1012,
        visibility_km: 10.0,
        wind_speed: 4.0,
        sunrise: Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap(),
        sunset: Utc.with_ymd_and_hms(2024, 6, 1, 20, 0, 0).unwrap(),
        condition_id: 800,
        description: "clear sky".to_string(),
        icon: "01d".to_string(),
    }
}

/// Eight samples a day for seven days, the shape the forecast endpoint
/// delivers
fn week_of_samples() -> Vec<ForecastSample> {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    (0..7 * 8)
        .map(|slot| ForecastSample {
            timestamp: start + Duration::hours(3 * slot),
            temperature: 15.0 + slot as f32 * 0.1,
            humidity: 60,
            wind_speed: 3.0,
            condition_id: 801,
            description: "few clouds".to_string(),
            icon: "02d".to_string(),
        })
        .collect()
}

/// In-memory source recording every call the orchestration issues
struct FakeSource {
    credential: bool,
    failing: Vec<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            credential: true,
            failing: Vec::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn without_credential() -> Self {
        Self {
            credential: false,
            ..Self::new()
        }
    }

    fn failing_for(cities: Vec<&'static str>) -> Self {
        Self {
            failing: cities,
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherSource for FakeSource {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn current_weather(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<CityWeatherSnapshot, SkycastError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("current:{city}:{units}"));
        if self.failing.contains(&city) {
            return Err(SkycastError::api(format!("simulated failure for {city}")));
        }
        Ok(snapshot(city))
    }

    async fn forecast(
        &self,
        city: &str,
        units: UnitSystem,
    ) -> Result<Vec<ForecastSample>, SkycastError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("forecast:{city}:{units}"));
        if self.failing.contains(&city) {
            return Err(SkycastError::api(format!("simulated failure for {city}")));
        }
        Ok(week_of_samples())
    }
}

fn cities(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

#[tokio::test]
async fn fetch_all_keeps_successes_in_input_order() {
    let source = FakeSource::failing_for(vec!["Bogota"]);
    let merged = dashboard::fetch_all(
        &source,
        &cities(&["Amsterdam", "Bogota", "Cairo"]),
        UnitSystem::Metric,
    )
    .await;

    let names: Vec<&str> = merged.iter().map(|s| s.city.as_str()).collect();
    assert_eq!(names, ["Amsterdam", "Cairo"]);
}

#[tokio::test]
async fn fetch_all_issues_one_request_per_city() {
    let source = FakeSource::new();
    dashboard::fetch_all(
        &source,
        &cities(&["Amsterdam", "Cairo"]),
        UnitSystem::Imperial,
    )
    .await;

    let mut calls = source.calls();
    calls.sort();
    assert_eq!(
        calls,
        ["current:Amsterdam:imperial", "current:Cairo:imperial"]
    );
}

#[tokio::test]
async fn fetch_all_without_credential_issues_no_requests() {
    let source = FakeSource::without_credential();
    let merged = dashboard::fetch_all(
        &source,
        &cities(&["Amsterdam", "Cairo"]),
        UnitSystem::Metric,
    )
    .await;

    assert!(merged.is_empty());
    assert!(source.calls().is_empty());
}

#[tokio::test]
async fn fetch_all_with_every_city_failing_is_empty_not_an_error() {
    let source = FakeSource::failing_for(vec!["Amsterdam", "Cairo"]);
    let merged =
        dashboard::fetch_all(&source, &cities(&["Amsterdam", "Cairo"]), UnitSystem::Metric).await;
    assert!(merged.is_empty());
}

#[tokio::test]
async fn lookup_fetches_forecast_only_after_current_succeeds() {
    let source = FakeSource::new();
    let lookup = dashboard::lookup(&source, "London", UnitSystem::Metric, &Utc)
        .await
        .unwrap();

    assert_eq!(
        source.calls(),
        ["current:London:metric", "forecast:London:metric"]
    );
    assert_eq!(lookup.snapshot.city, "London");
    assert_eq!(lookup.daily.len(), MAX_FORECAST_DAYS);
}

#[tokio::test]
async fn failed_current_conditions_never_issues_the_forecast_call() {
    let source = FakeSource::failing_for(vec!["London"]);
    let result = dashboard::lookup(&source, "London", UnitSystem::Metric, &Utc).await;

    assert!(result.is_err());
    assert_eq!(source.calls(), ["current:London:metric"]);
}

#[rstest]
#[case(UnitSystem::Metric)]
#[case(UnitSystem::Imperial)]
#[tokio::test]
async fn lookup_carries_the_requested_units_on_both_requests(#[case] units: UnitSystem) {
    let source = FakeSource::new();
    dashboard::lookup(&source, "London", units, &Utc).await.unwrap();

    for call in source.calls() {
        assert!(call.ends_with(units.as_query_param()), "call {call}");
    }
}

#[tokio::test]
async fn failed_lookup_clears_both_display_halves() {
    let source = FakeSource::failing_for(vec!["Atlantis"]);
    let mut state = DashboardState::new(UnitSystem::Metric, TrackedCities::default_list());

    // Something is on screen from an earlier search.
    let token = state.search_started("London");
    let lookup = dashboard::lookup(&source, "London", UnitSystem::Metric, &Utc)
        .await
        .unwrap();
    assert!(state.search_succeeded(token, lookup));
    assert!(state.selected.is_some());

    let token = state.search_started("Atlantis");
    let error = dashboard::lookup(&source, "Atlantis", UnitSystem::Metric, &Utc)
        .await
        .unwrap_err();
    assert!(state.search_failed(token, &error));

    assert!(state.selected.is_none());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn superseded_lookup_result_does_not_clobber_the_newer_one() {
    let source = FakeSource::new();
    let mut state = DashboardState::new(UnitSystem::Metric, TrackedCities::default_list());

    let stale = state.search_started("London");
    let fresh = state.search_started("Paris");

    let london = dashboard::lookup(&source, "London", UnitSystem::Metric, &Utc)
        .await
        .unwrap();
    let paris = dashboard::lookup(&source, "Paris", UnitSystem::Metric, &Utc)
        .await
        .unwrap();

    assert!(state.search_succeeded(fresh, paris));
    assert!(!state.search_succeeded(stale, london));
    assert_eq!(state.selected.as_ref().unwrap().snapshot.city, "Paris");
}

#[tokio::test]
async fn unit_change_invalidates_merged_snapshots_and_forces_relookup() {
    let source = FakeSource::new();
    let mut state = DashboardState::new(UnitSystem::Metric, TrackedCities::default_list());

    let token = state.search_started("London");
    let lookup = dashboard::lookup(&source, "London", UnitSystem::Metric, &Utc)
        .await
        .unwrap();
    assert!(state.search_succeeded(token, lookup));

    let refresh = state.refresh_started();
    let merged = dashboard::fetch_all(&source, &cities(&["Tokyo"]), UnitSystem::Metric).await;
    assert!(state.refresh_completed(refresh, merged));
    assert_eq!(state.city_snapshots.len(), 1);

    let relookup = state.unit_changed(UnitSystem::Imperial).unwrap();
    assert!(state.selected.is_none());
    assert!(state.city_snapshots.is_empty());

    let lookup = dashboard::lookup(&source, "London", UnitSystem::Imperial, &Utc)
        .await
        .unwrap();
    assert!(state.search_succeeded(relookup, lookup));
    assert!(state.selected.is_some());
}
