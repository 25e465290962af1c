//! Tracked-city list and its persistence
//!
//! The list of cities shown in the "other cities" panel is the only state
//! that survives a restart. It is stored as one JSON document under a fixed
//! path and written back after every effective mutation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SkycastError;

/// Cities shown when nothing has been saved yet
pub const DEFAULT_CITIES: [&str; 5] = ["New York", "Tokyo", "London", "Sydney", "Paris"];

/// Ordered set of city names: insertion order preserved, duplicates
/// disallowed under case-sensitive equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackedCities {
    names: Vec<String>,
}

impl TrackedCities {
    /// An empty list
    #[must_use]
    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    /// The fixed default list used when no stored value exists
    #[must_use]
    pub fn default_list() -> Self {
        Self {
            names: DEFAULT_CITIES.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    /// Append a city. Returns `false` without modification when the name is
    /// already present, so callers can skip the persistence write.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Remove a city. Returns `false` when the name was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    /// Case-sensitive membership check
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// The city names in insertion order
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for TrackedCities {
    /// The startup fallback: the fixed default list, not an empty one
    fn default() -> Self {
        Self::default_list()
    }
}

/// File-backed store for the tracked-city list
pub struct CityStore {
    path: PathBuf,
}

impl CityStore {
    /// Create a store over the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default storage location under the platform data directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("skycast").join("cities.json"))
    }

    /// Path this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the tracked cities, falling back to the default list when no
    /// stored value exists. A corrupt file is logged and treated the same
    /// way rather than failing startup.
    #[must_use]
    pub fn load(&self) -> TrackedCities {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no saved city list at {}, using defaults", self.path.display());
                return TrackedCities::default_list();
            }
            Err(e) => {
                warn!("could not read {}: {e}, using defaults", self.path.display());
                return TrackedCities::default_list();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cities) => cities,
            Err(e) => {
                warn!(
                    "could not parse saved city list at {}: {e}, using defaults",
                    self.path.display()
                );
                TrackedCities::default_list()
            }
        }
    }

    /// Persist the tracked cities, creating parent directories as needed
    pub fn save(&self, cities: &TrackedCities) -> Result<(), SkycastError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string(cities)
            .map_err(|e| SkycastError::storage(format!("Failed to serialize city list: {e}")))?;
        std::fs::write(&self.path, raw)?;

        debug!("saved {} cities to {}", cities.len(), self.path.display());
        Ok(())
    }
}
