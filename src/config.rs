//! Configuration management for `nexthour`
//!
//! Settings are layered: built-in defaults, an optional TOML file in the
//! platform config directory, `NEXTHOUR_`-prefixed environment variables,
//! and finally the provider credential from `API_KEY`.

use crate::ForecastError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the provider credential
pub const API_KEY_VAR: &str = "API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Provider API key, sent as the `apikey` query parameter
    #[serde(default)]
    pub api_key: Option<String>,
    /// Endpoint configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather provider endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// City search (lookup) endpoint
    #[serde(default = "default_city_search_url")]
    pub city_search_url: String,
    /// Hourly forecast endpoint; the location key is appended to it
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_city_search_url() -> String {
    "http://dataservice.accuweather.com/locations/v1/cities/search/".to_string()
}

fn default_forecast_url() -> String {
    "http://dataservice.accuweather.com/forecasts/v1/hourly/1hour/".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            city_search_url: default_city_search_url(),
            forecast_url: default_forecast_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ForecastConfig {
    /// Load configuration from the default file location and environment
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.or_else(Self::get_config_path);

        if let Some(config_file) = config_file.filter(|path| path.exists()) {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("NEXTHOUR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // An unset or empty key leaves the parameter off the request entirely
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.is_empty());
        builder = builder
            .set_override_option("api_key", api_key)
            .with_context(|| format!("Failed to read {API_KEY_VAR}"))?;

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: ForecastConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nexthour").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        // A blank key from any source means "no key", never `apikey=`
        if self.api_key.as_deref().is_some_and(|key| key.trim().is_empty()) {
            self.api_key = None;
        }
        if self.weather.city_search_url.is_empty() {
            self.weather.city_search_url = default_city_search_url();
        }
        if self.weather.forecast_url.is_empty() {
            self.weather.forecast_url = default_forecast_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_endpoints()?;
        self.validate_logging()?;
        Ok(())
    }

    /// Validate the provider credential, when one is configured
    pub fn validate_api_key(&self) -> Result<()> {
        if let Some(api_key) = &self.api_key {
            if api_key.trim().is_empty() {
                return Err(ForecastError::config(
                    "API key cannot be empty if provided. Either unset it or provide a valid key.",
                )
                .into());
            }
        }

        Ok(())
    }

    fn validate_endpoints(&self) -> Result<()> {
        for (name, url) in [
            ("city search", &self.weather.city_search_url),
            ("forecast", &self.weather.forecast_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ForecastError::config(format!(
                    "The {name} URL must be a valid HTTP or HTTPS URL, got '{url}'"
                ))
                .into());
            }
        }

        if self.weather.timeout_seconds == 0 {
            return Err(
                ForecastError::config("Request timeout must be at least 1 second").into(),
            );
        }

        if self.weather.timeout_seconds > 300 {
            return Err(
                ForecastError::config("Request timeout cannot exceed 300 seconds").into(),
            );
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(ForecastError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(ForecastError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
