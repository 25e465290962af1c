//! Data models for the skycast dashboard
//!
//! This module contains the core domain models organized by concern:
//! - Units: the measurement convention applied to all displayed values
//! - Weather: current-conditions snapshots and raw forecast samples
//! - OpenWeather: wire schema for the upstream service and conversions

pub mod openweather;
pub mod units;
pub mod weather;

// Re-export all public types for convenient access
pub use units::UnitSystem;
pub use weather::{CityWeatherSnapshot, ForecastSample};
