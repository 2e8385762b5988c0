//! Data models for the `nexthour` forecast lookup
//!
//! This module contains the core domain models organized by concern:
//! - Location: validated city query and the provider's location key
//! - Forecast: the first hourly forecast entry and its formatting

pub mod forecast;
pub mod location;

// Re-export all public types for convenient access
pub use forecast::ForecastEntry;
pub use location::{CityQuery, LocationKey};
