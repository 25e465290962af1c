//! Activity suggestions derived from current conditions
//!
//! Conditions are banded into coarse categories and the categories drive
//! the suggestion lists shown next to the current weather. Imperial inputs
//! are converted before banding so the thresholds live in one unit.

use serde::Serialize;

use crate::models::{CityWeatherSnapshot, UnitSystem};

/// Coarse temperature category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Freezing,
    Cold,
    Cool,
    Moderate,
    Warm,
    Hot,
}

/// Band a temperature reading, converting imperial input to Celsius first
#[must_use]
pub fn temperature_band(temperature: f32, units: UnitSystem) -> TemperatureBand {
    let celsius = match units {
        UnitSystem::Metric => temperature,
        UnitSystem::Imperial => (temperature - 32.0) * 5.0 / 9.0,
    };

    if celsius < 0.0 {
        TemperatureBand::Freezing
    } else if celsius < 10.0 {
        TemperatureBand::Cold
    } else if celsius < 20.0 {
        TemperatureBand::Cool
    } else if celsius < 28.0 {
        TemperatureBand::Moderate
    } else if celsius < 35.0 {
        TemperatureBand::Warm
    } else {
        TemperatureBand::Hot
    }
}

/// Weather category derived from the upstream condition-code ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    /// Fog, mist, haze and friends
    Atmosphere,
    Clear,
    Clouds,
}

/// Map an upstream condition code to its category
#[must_use]
pub fn condition_kind(condition_id: u16) -> ConditionKind {
    match condition_id {
        200..=299 => ConditionKind::Thunderstorm,
        300..=399 => ConditionKind::Drizzle,
        500..=599 => ConditionKind::Rain,
        600..=699 => ConditionKind::Snow,
        700..=799 => ConditionKind::Atmosphere,
        800 => ConditionKind::Clear,
        _ => ConditionKind::Clouds,
    }
}

/// Coarse wind category over m/s thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindBand {
    Calm,
    Light,
    Moderate,
    Strong,
    Severe,
}

/// Band a wind reading, converting imperial (mph) input to m/s first
#[must_use]
pub fn wind_band(speed: f32, units: UnitSystem) -> WindBand {
    let speed_ms = match units {
        UnitSystem::Metric => speed,
        UnitSystem::Imperial => speed * 0.447_04,
    };

    if speed_ms < 0.5 {
        WindBand::Calm
    } else if speed_ms < 3.3 {
        WindBand::Light
    } else if speed_ms < 7.9 {
        WindBand::Moderate
    } else if speed_ms < 13.8 {
        WindBand::Strong
    } else {
        WindBand::Severe
    }
}

/// Suggestion lists for the activities panel
#[derive(Debug, Clone, Serialize)]
pub struct ActivitySuggestions {
    pub outdoor: Vec<&'static str>,
    pub indoor: Vec<&'static str>,
    pub photography: &'static str,
}

/// Derive the full suggestion set from one snapshot
#[must_use]
pub fn suggestions_for(snapshot: &CityWeatherSnapshot, units: UnitSystem) -> ActivitySuggestions {
    let temperature = temperature_band(snapshot.temperature, units);
    let condition = condition_kind(snapshot.condition_id);
    let wind = wind_band(snapshot.wind_speed, units);
    let is_day = snapshot.icon.ends_with('d');

    ActivitySuggestions {
        outdoor: outdoor_activities(temperature, condition, wind),
        indoor: indoor_activities(condition, temperature),
        photography: photography_tip(condition, is_day),
    }
}

fn outdoor_activities(
    temperature: TemperatureBand,
    condition: ConditionKind,
    wind: WindBand,
) -> Vec<&'static str> {
    let mut activities: Vec<&'static str> = match temperature {
        TemperatureBand::Freezing => vec!["Ice skating", "Snowboarding", "Building a snowman"],
        TemperatureBand::Cold => vec!["Brisk walking", "Winter hiking", "Photography"],
        TemperatureBand::Cool => vec!["Jogging", "Cycling", "Outdoor workout"],
        TemperatureBand::Moderate => vec!["Picnic in the park", "Outdoor dining", "Hiking"],
        TemperatureBand::Warm => vec!["Swimming", "Beach visit", "Water sports"],
        TemperatureBand::Hot => vec!["Water park", "Pool day", "Early morning/late evening walks"],
    };

    match condition {
        ConditionKind::Clear => {
            activities.extend(["Stargazing (at night)", "Sunbathing", "Outdoor sports"]);
        }
        ConditionKind::Clouds => {
            activities.extend(["Flying kites", "Photography", "Outdoor cafes"]);
        }
        ConditionKind::Rain | ConditionKind::Drizzle => {
            // Rain collapses the list to the umbrella-safe pair.
            return vec!["Brief walk with umbrella", "Photography (with protection)"];
        }
        ConditionKind::Thunderstorm => return Vec::new(),
        ConditionKind::Snow => {
            activities.extend(["Sledding", "Building snowmen", "Snowball fights"]);
        }
        ConditionKind::Atmosphere => {}
    }

    if matches!(wind, WindBand::Strong | WindBand::Severe) {
        activities.retain(|activity| {
            !["Flying kites", "Sunbathing", "Beach visit"].contains(activity)
        });
        return activities;
    }

    activities.truncate(5);
    activities
}

fn indoor_activities(condition: ConditionKind, temperature: TemperatureBand) -> Vec<&'static str> {
    let activities = [
        "Reading a book",
        "Watching movies",
        "Cooking a new recipe",
        "Board games",
        "Home workout",
        "Arts and crafts",
        "Virtual museum tours",
        "Online learning",
        "Video games",
        "Baking",
    ];

    // On nice days, suggest fewer indoor activities.
    if condition == ConditionKind::Clear
        && temperature != TemperatureBand::Hot
        && temperature != TemperatureBand::Freezing
    {
        return activities[..3].to_vec();
    }

    if matches!(condition, ConditionKind::Thunderstorm | ConditionKind::Rain) {
        return vec![
            "Movie marathon",
            "Reading with hot tea/coffee",
            "Baking comfort food",
            "Board games",
            "Crafting",
        ];
    }

    activities[..5].to_vec()
}

fn photography_tip(condition: ConditionKind, is_day: bool) -> &'static str {
    match condition {
        ConditionKind::Thunderstorm => "Lightning photography (from a safe indoor location)",
        ConditionKind::Rain | ConditionKind::Drizzle => {
            "Raindrops on windows, reflections in puddles"
        }
        ConditionKind::Snow => "Snow landscapes, macro shots of snowflakes",
        ConditionKind::Clear if !is_day => "Night sky photography, light trails",
        ConditionKind::Clear => "Golden hour portraits, landscapes with long shadows",
        ConditionKind::Clouds => "Soft, diffused lighting for portraits, moody landscapes",
        ConditionKind::Atmosphere => "Foggy/misty scenes, atmospheric landscapes with depth",
    }
}
