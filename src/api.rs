//! Weather API client for the AccuWeather location and forecast endpoints
//!
//! This module provides the blocking HTTP calls and the wire types of the
//! two endpoints. Every request carries the configured API key as the
//! `apikey` query parameter; transport failures are reported with the key
//! stripped from the URL.

use crate::config::ForecastConfig;
use crate::models::{CityQuery, LocationKey};
use crate::{ForecastError, Result};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Number;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

const USER_AGENT: &str = concat!("nexthour/", env!("CARGO_PKG_VERSION"));

/// One candidate from the city search endpoint
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct LocationRecord {
    /// Location key used by the forecast endpoint
    pub key: LocationKey,
    pub localized_name: Option<String>,
    pub country: Option<CountryRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CountryRecord {
    #[serde(rename = "ID")]
    pub id: Option<String>,
}

/// One hour from the hourly forecast endpoint
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct HourlyForecastRecord {
    /// ISO 8601 timestamp with offset, e.g. `2023-06-15T14:00:00+01:00`
    pub date_time: String,
    pub temperature: TemperatureRecord,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct TemperatureRecord {
    /// Kept as sent so integers and floats render distinctly
    pub value: Number,
    pub unit: Option<String>,
}

/// Weather API client
pub struct WeatherApiClient {
    /// HTTP client
    client: Client,
    api_key: Option<String>,
    city_search_url: String,
    forecast_url: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &ForecastConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ForecastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            city_search_url: config.weather.city_search_url.clone(),
            forecast_url: config.weather.forecast_url.clone(),
        })
    }

    /// Search the provider's city database
    #[instrument(skip(self, city), fields(city = %city))]
    pub fn search_city(&self, city: &CityQuery) -> Result<Vec<LocationRecord>> {
        let records: Vec<LocationRecord> =
            self.get_json(&self.city_search_url, &[("q", city.as_str())])?;

        debug!(
            "City search returned {} candidates: {:?}",
            records.len(),
            records
                .iter()
                .map(|r| format!(
                    "{} ({}, {})",
                    r.key,
                    r.localized_name.as_deref().unwrap_or("?"),
                    r.country.as_ref().and_then(|c| c.id.as_deref()).unwrap_or("?")
                ))
                .collect::<Vec<_>>()
        );

        Ok(records)
    }

    /// Fetch the next-hour forecast for a location key, in metric units
    #[instrument(skip(self, key), fields(key = %key))]
    pub fn hourly_forecast(&self, key: &LocationKey) -> Result<Vec<HourlyForecastRecord>> {
        let url = format!("{}{}", self.forecast_url, urlencoding::encode(key.as_str()));
        let records: Vec<HourlyForecastRecord> = self.get_json(&url, &[("metric", "true")])?;
        debug!("Forecast returned {} entries", records.len());
        Ok(records)
    }

    /// Issue a GET with the API key and `params`, then decode the JSON body
    fn get_json<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        let response = self.make_request(url, params)?;
        let body_url = redact_url(response.url());

        response.json::<T>().map_err(|e| {
            ForecastError::parse(format!("Invalid response body from {body_url}: {e}"))
        })
    }

    fn make_request(&self, url: &str, params: &[(&str, &str)]) -> Result<Response> {
        let mut request = self.client.get(url);
        if let Some(api_key) = &self.api_key {
            request = request.query(&[("apikey", api_key.as_str())]);
        }
        request = request.query(params);

        let start = Instant::now();
        let response = request.send().map_err(|e| {
            ForecastError::network(format!("Request to {} failed: {}", redact_str(url), e))
        })?;

        let status = response.status();
        debug!(
            "HTTP {} from {} in {:.3}s",
            status,
            redact_url(response.url()),
            start.elapsed().as_secs_f64()
        );

        if status.is_client_error() || status.is_server_error() {
            let side = if status.is_client_error() {
                "Client"
            } else {
                "Server"
            };
            return Err(ForecastError::transport(
                format!(
                    "{} {} Error: {} for url: {}",
                    status.as_u16(),
                    side,
                    status.canonical_reason().unwrap_or("Unknown"),
                    redact_url(response.url())
                ),
                status.as_u16(),
            ));
        }

        Ok(response)
    }
}

/// Render a URL with any `apikey` query parameter removed
#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut redacted = url.clone();
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != "apikey")
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        redacted.set_query(None);
    } else {
        redacted.query_pairs_mut().clear().extend_pairs(kept);
    }
    redacted.to_string()
}

fn redact_str(url: &str) -> String {
    Url::parse(url).map_or_else(|_| url.to_string(), |parsed| redact_url(&parsed))
}
