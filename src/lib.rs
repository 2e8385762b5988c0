//! `nexthour` - next-hour temperature forecast for a city
//!
//! This library resolves a city name to a weather provider's location key
//! and fetches the first entry of that location's hourly forecast.

pub mod api;
pub mod config;
pub mod error;
pub mod forecast;
pub mod location_resolver;
pub mod logging;
pub mod models;

// Re-export core types for public API
pub use api::{HourlyForecastRecord, LocationRecord, WeatherApiClient};
pub use config::ForecastConfig;
pub use error::ForecastError;
pub use forecast::ForecastClient;
pub use location_resolver::LocationResolver;
pub use models::{CityQuery, ForecastEntry, LocationKey};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ForecastError>;
