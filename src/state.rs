//! Dashboard session state
//!
//! One explicit state value mutated only through named transitions, so it is
//! always clear which fields are consistent with each other. Fetches are
//! tagged with tokens minted by the `*_started` transitions; a completion
//! carrying a stale token is discarded instead of overwriting newer state on
//! arrival order.

use crate::dashboard::CityLookup;
use crate::error::SkycastError;
use crate::models::{CityWeatherSnapshot, UnitSystem};
use crate::store::TrackedCities;

/// Token for one search/lookup request. Completions are only applied when
/// the token still matches the latest search generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Token for one tracked-city refresh. Kept separate from [`RequestToken`]:
/// a refresh finishing must not be invalidated by an unrelated search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshToken(u64);

/// The whole dashboard session
#[derive(Debug)]
pub struct DashboardState {
    /// Current search text
    pub query: String,
    /// Unit system for all displayed values
    pub units: UnitSystem,
    /// Result of the latest successful lookup. Current conditions and daily
    /// forecast are an atomic pair: both present or both absent.
    pub selected: Option<CityLookup>,
    /// Whether a lookup is in flight
    pub loading: bool,
    /// Human-readable message of the latest failure, if any
    pub error: Option<String>,
    /// The persisted tracked-city list
    pub cities: TrackedCities,
    /// Latest merged snapshots for the tracked cities
    pub city_snapshots: Vec<CityWeatherSnapshot>,
    search_generation: u64,
    refresh_generation: u64,
}

impl DashboardState {
    /// Fresh session over a loaded city list
    #[must_use]
    pub fn new(units: UnitSystem, cities: TrackedCities) -> Self {
        Self {
            query: String::new(),
            units,
            selected: None,
            loading: false,
            error: None,
            cities,
            city_snapshots: Vec::new(),
            search_generation: 0,
            refresh_generation: 0,
        }
    }

    /// A lookup for `query` has been issued. Supersedes any in-flight lookup.
    pub fn search_started(&mut self, query: &str) -> RequestToken {
        self.query = query.to_string();
        self.loading = true;
        self.error = None;
        self.search_generation += 1;
        RequestToken(self.search_generation)
    }

    /// A lookup finished successfully. Returns `false` (and changes nothing)
    /// when the token is stale.
    pub fn search_succeeded(&mut self, token: RequestToken, lookup: CityLookup) -> bool {
        if token.0 != self.search_generation {
            return false;
        }
        self.loading = false;
        self.error = None;
        self.selected = Some(lookup);
        true
    }

    /// A lookup failed. Clears the atomic current+forecast pair and records
    /// the user-facing message. Returns `false` when the token is stale.
    pub fn search_failed(&mut self, token: RequestToken, error: &SkycastError) -> bool {
        if token.0 != self.search_generation {
            return false;
        }
        self.loading = false;
        self.selected = None;
        self.error = Some(error.user_message());
        true
    }

    /// A tracked-city refresh has been issued
    pub fn refresh_started(&mut self) -> RefreshToken {
        self.refresh_generation += 1;
        RefreshToken(self.refresh_generation)
    }

    /// A tracked-city refresh settled. Returns `false` when the token is
    /// stale.
    pub fn refresh_completed(
        &mut self,
        token: RefreshToken,
        snapshots: Vec<CityWeatherSnapshot>,
    ) -> bool {
        if token.0 != self.refresh_generation {
            return false;
        }
        self.city_snapshots = snapshots;
        true
    }

    /// Switch unit systems. Displayed values are never converted locally:
    /// everything fetched under the old unit is invalidated, in-flight
    /// completions become stale, and when a city was displayed a token for
    /// the forced re-lookup is handed back. The tracked-city refresh is
    /// restarted by the caller via [`Self::refresh_started`].
    pub fn unit_changed(&mut self, units: UnitSystem) -> Option<RequestToken> {
        if units == self.units {
            return None;
        }

        self.units = units;
        self.search_generation += 1;
        self.refresh_generation += 1;
        self.city_snapshots.clear();

        if self.selected.take().is_some() {
            self.loading = true;
            Some(RequestToken(self.search_generation))
        } else {
            None
        }
    }

    /// Track a city. Returns whether the list changed (a present name is a
    /// no-op); the caller persists only on `true`.
    pub fn city_added(&mut self, name: &str) -> bool {
        self.cities.add(name)
    }

    /// Stop tracking a city. Returns whether the list changed.
    pub fn city_removed(&mut self, name: &str) -> bool {
        self.cities.remove(name)
    }
}
