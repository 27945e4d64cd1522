//! Diagnostics for fetch failures and subscriber setup for the binary
//!
//! Library code reports failed fetch attempts through [`ErrorLog`]. The default
//! implementation forwards to `tracing`; [`MemoryErrorLog`] keeps records in
//! memory so callers can inspect what was reported.

use std::io::IsTerminal;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::client::FetchError;

/// Receives one record per failed fetch attempt
pub trait ErrorLog: Send + Sync {
    fn log_error(&self, endpoint: &str, error: &FetchError);
}

/// Emits failed attempts as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log_error(&self, endpoint: &str, error: &FetchError) {
        tracing::error!(endpoint, error = %error, "Error fetching data");
    }
}

/// A failure recorded by [`MemoryErrorLog`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedError {
    pub endpoint: String,
    pub message: String,
}

/// Collects failed attempts in memory
#[derive(Debug, Default)]
pub struct MemoryErrorLog {
    records: Mutex<Vec<LoggedError>>,
}

impl MemoryErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything logged so far, oldest first
    pub fn records(&self) -> Vec<LoggedError> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorLog for MemoryErrorLog {
    fn log_error(&self, endpoint: &str, error: &FetchError) {
        if let Ok(mut records) = self.records.lock() {
            records.push(LoggedError {
                endpoint: endpoint.to_string(),
                message: error.to_string(),
            });
        }
    }
}

/// Errors that can occur while installing the log subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level or filter directive could not be parsed
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    /// A global subscriber is already installed
    #[error("Failed to install log subscriber: {0}")]
    Init(String),
}

/// Builds the filter used by the binary
///
/// `RUST_LOG` wins when set and valid; otherwise `default_filter` is used
/// (a level such as `info`, or any `EnvFilter` directive).
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|source| LoggingError::InvalidFilter {
        filter: default_filter.to_string(),
        source,
    })
}

/// Installs a global fmt subscriber writing to stderr
pub fn init(default_filter: &str) -> Result<(), LoggingError> {
    let filter = build_filter(default_filter)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
