//! Next-hour forecast lookup
//!
//! [`ForecastClient`] runs the two-step flow: resolve the city to a
//! location key, then fetch the hourly forecast for that key and report
//! its first entry.

use crate::config::ForecastConfig;
use crate::location_resolver::LocationResolver;
use crate::models::{ForecastEntry, LocationKey};
use crate::{ForecastError, Result, WeatherApiClient};
use tracing::{debug, info};

/// Orchestrates lookup-then-forecast for one city
pub struct ForecastClient {
    api: WeatherApiClient,
}

impl ForecastClient {
    /// Create a client from configuration (API key and endpoints)
    pub fn new(config: &ForecastConfig) -> Result<Self> {
        Ok(Self {
            api: WeatherApiClient::new(config)?,
        })
    }

    /// Resolve a city name to the provider's location key
    pub fn resolve_location(&self, city: &str) -> Result<LocationKey> {
        LocationResolver::resolve_location(&self.api, city)
    }

    /// Fetch the next-hour forecast for `city`, log it and return it
    pub fn get_forecast(&self, city: &str) -> Result<ForecastEntry> {
        let key = self.resolve_location(city)?;
        let records = self.api.hourly_forecast(&key)?;

        let first = records
            .first()
            .ok_or_else(|| ForecastError::parse("Forecast response contained no entries."))?;

        if let Some(unit) = first.temperature.unit.as_deref().filter(|u| *u != "C") {
            debug!("Provider reported temperature unit '{}'", unit);
        }

        let entry = ForecastEntry::from_parts(&first.date_time, first.temperature.value.clone())?;
        info!("{}", entry);
        Ok(entry)
    }
}
