//! Unit system model

use serde::{Deserialize, Serialize};

/// Measurement convention applied to all displayed values.
///
/// Serializes as `"metric"` / `"imperial"`, the exact strings the upstream
/// service accepts as its `units` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, metres per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
}

impl UnitSystem {
    /// Value of the upstream `units` query parameter
    #[must_use]
    pub fn as_query_param(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// The other unit system
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Temperature suffix for display
    #[must_use]
    pub fn temperature_symbol(self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    /// Wind speed unit for display
    #[must_use]
    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_matches_serde_form() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
        assert_eq!(UnitSystem::Imperial.as_query_param(), "imperial");

        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(UnitSystem::Metric.toggled(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::Metric.toggled().toggled(), UnitSystem::Metric);
    }
}
