//! Error types and handling for `nexthour`

use thiserror::Error;

/// Main error type for the forecast lookup
#[derive(Error, Debug)]
pub enum ForecastError {
    /// City name failed the alphabetic-only check
    #[error("{message}")]
    InvalidCityName { message: String },

    /// Lookup endpoint returned no matching city
    #[error("{message}")]
    EmptyDatabase { message: String },

    /// Non-success HTTP status from either endpoint
    #[error("{message}")]
    Transport { message: String, status: u16 },

    /// The request never produced a response
    #[error("{message}")]
    Network { message: String },

    /// Response body did not have the expected shape
    #[error("{message}")]
    Parse { message: String },

    /// Configuration-related errors
    #[error("{message}")]
    Config { message: String },
}

impl ForecastError {
    /// Create a new invalid city name error
    pub fn invalid_city_name<S: Into<String>>(message: S) -> Self {
        Self::InvalidCityName {
            message: message.into(),
        }
    }

    /// Create a new empty database error
    pub fn empty_database<S: Into<String>>(message: S) -> Self {
        Self::EmptyDatabase {
            message: message.into(),
        }
    }

    /// Create a new transport error for an HTTP status code
    pub fn transport<S: Into<String>>(message: S, status: u16) -> Self {
        Self::Transport {
            message: message.into(),
            status,
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Name of the error kind as it appears in the log line
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ForecastError::InvalidCityName { .. } => "InvalidCityNameError",
            ForecastError::EmptyDatabase { .. } => "EmptyDatabaseError",
            ForecastError::Transport { .. } => "TransportError",
            ForecastError::Network { .. } => "NetworkError",
            ForecastError::Parse { .. } => "ParseError",
            ForecastError::Config { .. } => "ConfigError",
        }
    }

    /// Single-line `<Kind>: <message>` form logged before exiting
    #[must_use]
    pub fn log_line(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
