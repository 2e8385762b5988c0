//! Location Resolution Module
//!
//! Turns a city name into the provider's location key. The name is
//! validated before any request leaves the process.

use crate::models::{CityQuery, LocationKey};
use crate::{ForecastError, Result, WeatherApiClient};
use tracing::debug;

/// Service for resolving city names
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a city name into the key of its best match
    pub fn resolve_location(api_client: &WeatherApiClient, city: &str) -> Result<LocationKey> {
        debug!("Resolving city: {}", city);

        let query = CityQuery::parse(city)?;
        let candidates = api_client.search_city(&query)?;

        let best = candidates.into_iter().next().ok_or_else(|| {
            ForecastError::empty_database("There is no match in the database.")
        })?;

        debug!(
            "Resolved '{}' to location key {} ({})",
            query,
            best.key,
            best.localized_name.as_deref().unwrap_or("unnamed")
        );

        Ok(best.key)
    }
}
