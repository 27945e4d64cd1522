//! Command-line interface parsing for fetchkit
//!
//! Every option can also be supplied through a `FETCHKIT_*` environment
//! variable. With no arguments the binary fetches `/users` from the demo API
//! and searches for "Ervin".

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::client::{RetryMode, RetryPolicy, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS};

/// Endpoint fetched when none is given
pub const DEFAULT_ENDPOINT: &str = "/users";

/// Search query used when none is given
pub const DEFAULT_QUERY: &str = "Ervin";

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified retry mode is not recognized
    #[error("Invalid retry mode: '{0}'. Valid modes: all, transient")]
    InvalidRetryMode(String),

    /// The base URL is not an http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),
}

/// fetchkit - Fetch a JSON collection, then filter, sort, and search it
#[derive(Parser, Debug)]
#[command(name = "fetchkit")]
#[command(about = "Fetch a JSON collection with caching and retries, then filter and search it")]
#[command(version)]
pub struct Cli {
    /// Base URL the endpoint is appended to
    #[arg(long, env = "FETCHKIT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Endpoint path to fetch, used verbatim as the cache key
    #[arg(long, env = "FETCHKIT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Total number of attempts per fetch
    #[arg(long, env = "FETCHKIT_RETRIES", default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub retries: u32,

    /// Case-insensitive substring to search item names for
    #[arg(long, env = "FETCHKIT_QUERY", default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Which failures to retry: all, transient
    #[arg(long, env = "FETCHKIT_RETRY_MODE", default_value = "all", value_name = "MODE")]
    pub retry_mode: String,

    /// Per-request timeout in seconds (no timeout when omitted)
    #[arg(long, env = "FETCHKIT_TIMEOUT", value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

/// Validated settings for one run of the binary
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub endpoint: String,
    pub query: String,
    pub retry: RetryPolicy,
    pub timeout: Option<Duration>,
    pub log_level: String,
}

/// Parses a retry mode argument into a RetryMode.
///
/// # Returns
/// * `Ok(RetryMode)` if the string names a known mode
/// * `Err(CliError::InvalidRetryMode)` otherwise
pub fn parse_retry_mode_arg(s: &str) -> Result<RetryMode, CliError> {
    RetryMode::from_name(s).ok_or_else(|| CliError::InvalidRetryMode(s.to_string()))
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments.
    ///
    /// A trailing `/` on the base URL is dropped so that `--base-url http://host/`
    /// and `--endpoint /users` do not produce `//users`.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let base_url = cli.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(CliError::InvalidBaseUrl(cli.base_url.clone()));
        }

        let mode = parse_retry_mode_arg(&cli.retry_mode)?;

        Ok(RunConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: cli.endpoint.clone(),
            query: cli.query.clone(),
            retry: RetryPolicy::new(cli.retries).with_mode(mode),
            timeout: cli.timeout.map(Duration::from_secs),
            log_level: cli.log_level.clone(),
        })
    }
}
