//! Error types and handling for the `skycast` dashboard service

use thiserror::Error;

/// Main error type for the `skycast` application
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Configuration-related errors (missing or rejected API credential)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The upstream service could not resolve the requested city
    #[error("City not found: {city}")]
    CityNotFound { city: String },

    /// API communication errors (network failure, non-success response)
    #[error("API error: {message}")]
    Api { message: String },

    /// Tracked-city storage errors
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new city-not-found error
    pub fn city_not_found<S: Into<String>>(city: S) -> Self {
        Self::CityNotFound { city: city.into() }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage<S: Into<String>>(message: S) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::Config { .. } => {
                "API key is missing or invalid. Please check your configuration.".to_string()
            }
            SkycastError::CityNotFound { .. } => {
                "City not found. Please try another location.".to_string()
            }
            SkycastError::Api { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            SkycastError::Storage { .. } => {
                "Could not read or write the saved-city list.".to_string()
            }
            SkycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
