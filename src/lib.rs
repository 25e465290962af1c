//! `skycast` - weather dashboard core
//!
//! This library provides the data flow behind the dashboard: single-city
//! weather lookups, daily forecast reduction, the concurrent tracked-city
//! merge, session state with explicit transitions, and persistence of the
//! tracked-city list. The HTTP layer in [`api`]/[`web`] is a thin boundary
//! over these pieces.

pub mod activities;
pub mod api;
pub mod astro;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forecast;
pub mod models;
pub mod state;
pub mod store;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use dashboard::{CityLookup, fetch_all, lookup};
pub use error::SkycastError;
pub use forecast::{
    DailyForecast, MAX_FORECAST_DAYS, reduce_to_daily_forecast, reduce_to_daily_forecast_local,
};
pub use models::{CityWeatherSnapshot, ForecastSample, UnitSystem};
pub use state::{DashboardState, RefreshToken, RequestToken};
pub use store::{CityStore, DEFAULT_CITIES, TrackedCities};
pub use weather::{OpenWeatherClient, WeatherSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
