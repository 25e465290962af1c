use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use skycast::api::AppContext;
use skycast::config::{LoggingConfig, SkycastConfig};
use skycast::store::CityStore;
use skycast::weather::OpenWeatherClient;
use skycast::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load()?;
    init_logging(&config.logging);

    if config.weather.api_key.is_none() {
        tracing::warn!("no OpenWeatherMap API key configured; lookups will report it");
    }

    let client = OpenWeatherClient::new(&config.weather)?;

    let cities_path = config
        .defaults
        .cities_path
        .clone()
        .map(PathBuf::from)
        .or_else(CityStore::default_path)
        .unwrap_or_else(|| PathBuf::from("cities.json"));
    let store = CityStore::new(cities_path);
    let cities = store.load();
    tracing::info!("tracking {} cities", cities.len());

    let context = Arc::new(AppContext {
        client,
        store,
        cities: Mutex::new(cities),
        default_units: config.defaults.units,
        timezone: config.display_timezone()?,
    });

    web::run(config.server.port, &config.server.static_dir, context).await
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));

    if logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
