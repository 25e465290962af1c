//! HTTP API consumed by the dashboard frontend
//!
//! Thin boundary over the core: handlers deserialize the request, call into
//! the dashboard orchestration and serialize the result. No weather logic
//! lives here.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::activities::{self, ActivitySuggestions};
use crate::astro::{self, MoonPhase, SolarWindows};
use crate::dashboard;
use crate::error::SkycastError;
use crate::forecast::DailyForecast;
use crate::models::{CityWeatherSnapshot, UnitSystem};
use crate::store::{CityStore, TrackedCities};
use crate::weather::OpenWeatherClient;

/// Shared services behind the router
pub struct AppContext {
    pub client: OpenWeatherClient,
    pub store: CityStore,
    pub cities: Mutex<TrackedCities>,
    pub default_units: UnitSystem,
    pub timezone: Option<chrono_tz::Tz>,
}

/// Build the `/api` router over the shared context
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/weather/{city}", get(lookup_city))
        .route("/dashboard", get(dashboard_snapshots))
        .route("/cities", get(list_cities).post(add_city))
        .route("/cities/{name}", delete(remove_city))
        .with_state(context)
}

#[derive(Debug, Deserialize)]
struct UnitsQuery {
    units: Option<UnitSystem>,
}

#[derive(Debug, Serialize)]
struct LookupResponse {
    current: CityWeatherSnapshot,
    forecast: DailyForecast,
    astro: AstroReport,
    activities: ActivitySuggestions,
}

#[derive(Debug, Serialize)]
struct AstroReport {
    is_daytime: bool,
    solar_windows: SolarWindows,
    moon: MoonPhase,
}

#[derive(Debug, Deserialize)]
struct AddCityRequest {
    name: String,
}

/// Error wrapper mapping the taxonomy onto HTTP statuses
struct ApiError(SkycastError);

impl From<SkycastError> for ApiError {
    fn from(error: SkycastError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SkycastError::CityNotFound { .. } => StatusCode::NOT_FOUND,
            SkycastError::Api { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({ "error": self.0.user_message() }));
        (status, body).into_response()
    }
}

async fn lookup_city(
    State(context): State<Arc<AppContext>>,
    Path(city): Path<String>,
    Query(query): Query<UnitsQuery>,
) -> Result<Json<LookupResponse>, ApiError> {
    let units = query.units.unwrap_or(context.default_units);

    let lookup = match context.timezone {
        Some(tz) => dashboard::lookup(&context.client, &city, units, &tz).await?,
        None => dashboard::lookup(&context.client, &city, units, &Local).await?,
    };

    let now = Utc::now();
    let astro = AstroReport {
        is_daytime: lookup.snapshot.is_daytime_at(now),
        solar_windows: SolarWindows::from_sun_events(
            lookup.snapshot.sunrise,
            lookup.snapshot.sunset,
        ),
        moon: astro::moon_phase(now),
    };
    let suggestions = activities::suggestions_for(&lookup.snapshot, units);

    Ok(Json(LookupResponse {
        current: lookup.snapshot,
        forecast: lookup.daily,
        astro,
        activities: suggestions,
    }))
}

async fn dashboard_snapshots(
    State(context): State<Arc<AppContext>>,
    Query(query): Query<UnitsQuery>,
) -> Json<Vec<CityWeatherSnapshot>> {
    let units = query.units.unwrap_or(context.default_units);
    let cities = context.cities.lock().await.names().to_vec();

    Json(dashboard::fetch_all(&context.client, &cities, units).await)
}

async fn list_cities(State(context): State<Arc<AppContext>>) -> Json<Vec<String>> {
    Json(context.cities.lock().await.names().to_vec())
}

async fn add_city(
    State(context): State<Arc<AppContext>>,
    Json(request): Json<AddCityRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
    let mut cities = context.cities.lock().await;
    if cities.add(&request.name) {
        context.store.save(&cities)?;
    }
    Ok(Json(cities.names().to_vec()))
}

async fn remove_city(
    State(context): State<Arc<AppContext>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let mut cities = context.cities.lock().await;
    if cities.remove(&name) {
        context.store.save(&cities)?;
    }
    Ok(Json(cities.names().to_vec()))
}
