use clap::Parser;
use nexthour::config::{ForecastConfig, LoggingConfig};
use nexthour::logging::init_logging;
use nexthour::ForecastClient;
use std::process::ExitCode;
use tracing::error;

/// A weather app
#[derive(Parser, Debug)]
#[command(name = "nexthour", version, about = "A weather app")]
struct Cli {
    /// Returns forecast data for the next hour for a specific location.
    city: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match ForecastConfig::load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LoggingConfig::default());
            error!("ConfigError: {:#}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config.logging);

    let result = ForecastClient::new(&config).and_then(|client| client.get_forecast(&cli.city));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e.log_line());
            ExitCode::FAILURE
        }
    }
}
