//! Astronomical derivations for the dashboard panel
//!
//! Sunrise and sunset come from the upstream service; this module derives
//! the photographic windows around them and the moon phase for the night
//! panel. All pure arithmetic, no lookups.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Mean length of the lunar cycle in days
const SYNODIC_MONTH_DAYS: f64 = 29.530_588_853;

/// A known new moon: 2000-01-06 18:14 UTC, as seconds since the Unix epoch
const NEW_MOON_REFERENCE_SECS: i64 = 947_182_440;

/// Closed interval of wall-clock time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Whether `at` falls inside the window (inclusive on both ends)
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}

/// Golden- and blue-hour windows for one day at one place
#[derive(Debug, Clone, Serialize)]
pub struct SolarWindows {
    pub golden_morning: TimeWindow,
    pub golden_evening: TimeWindow,
    pub blue_morning: TimeWindow,
    pub blue_evening: TimeWindow,
}

impl SolarWindows {
    /// Derive the windows from sunrise and sunset: golden hour is the hour
    /// after sunrise and before sunset, blue hour the half hour before
    /// sunrise and after sunset.
    #[must_use]
    pub fn from_sun_events(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> Self {
        Self {
            golden_morning: TimeWindow {
                start: sunrise,
                end: sunrise + Duration::hours(1),
            },
            golden_evening: TimeWindow {
                start: sunset - Duration::hours(1),
                end: sunset,
            },
            blue_morning: TimeWindow {
                start: sunrise - Duration::minutes(30),
                end: sunrise,
            },
            blue_evening: TimeWindow {
                start: sunset,
                end: sunset + Duration::minutes(30),
            },
        }
    }

    /// Whether either golden-hour window is active at `at`
    #[must_use]
    pub fn in_golden_hour(&self, at: DateTime<Utc>) -> bool {
        self.golden_morning.contains(at) || self.golden_evening.contains(at)
    }

    /// Whether either blue-hour window is active at `at`
    #[must_use]
    pub fn in_blue_hour(&self, at: DateTime<Utc>) -> bool {
        self.blue_morning.contains(at) || self.blue_evening.contains(at)
    }
}

/// Moon state for one instant
#[derive(Debug, Clone, Serialize)]
pub struct MoonPhase {
    /// Position in the cycle, 0 = new moon, 0.5 = full moon, exclusive 1
    pub phase: f64,
    /// Illuminated fraction of the disc, 0..=1
    pub illumination: f64,
    /// Conventional phase name ("Waxing Crescent", "Full Moon", ...)
    pub name: &'static str,
}

impl MoonPhase {
    /// Whether the illuminated fraction is growing
    #[must_use]
    pub fn is_waxing(&self) -> bool {
        self.phase < 0.5
    }
}

/// Compute the moon phase at `at` from the mean synodic cycle.
///
/// Accurate to a few hours against the true moon, which is plenty for a
/// phase name and an illumination percentage.
#[must_use]
pub fn moon_phase(at: DateTime<Utc>) -> MoonPhase {
    let elapsed_days = (at.timestamp() - NEW_MOON_REFERENCE_SECS) as f64 / 86_400.0;
    let age = elapsed_days.rem_euclid(SYNODIC_MONTH_DAYS);
    let phase = age / SYNODIC_MONTH_DAYS;
    let illumination = (1.0 - (std::f64::consts::TAU * phase).cos()) / 2.0;

    MoonPhase {
        phase,
        illumination,
        name: phase_name(phase),
    }
}

/// Map a cycle position to one of the eight conventional names
fn phase_name(phase: f64) -> &'static str {
    match phase {
        p if !(0.0625..0.9375).contains(&p) => "New Moon",
        p if p < 0.1875 => "Waxing Crescent",
        p if p < 0.3125 => "First Quarter",
        p if p < 0.4375 => "Waxing Gibbous",
        p if p < 0.5625 => "Full Moon",
        p if p < 0.6875 => "Waning Gibbous",
        p if p < 0.8125 => "Last Quarter",
        _ => "Waning Crescent",
    }
}
