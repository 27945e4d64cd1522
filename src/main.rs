//! fetchkit - Fetch a JSON collection, then filter, sort, and search it
//!
//! Fetches one endpoint (with caching and retries), prints the active items
//! sorted by name, then prints the items matching the search query.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use fetchkit::app;
use fetchkit::cli::{Cli, RunConfig};
use fetchkit::client::{ApiClient, HttpTransport};
use fetchkit::logging;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match RunConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(2));
        }
    };

    logging::init(&config.log_level)?;

    let transport = HttpTransport::with_timeout(config.timeout)?;
    let mut client = ApiClient::with_transport(config.base_url.as_str(), transport)
        .with_retry_policy(config.retry);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app::run(&mut client, &config, &mut out).await {
        error!(error = %e, "Failed to process data");
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
