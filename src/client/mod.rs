//! JSON API client with an in-memory response cache and bounded retries
//!
//! [`ApiClient::fetch_once`] resolves an endpoint from the cache or with a single
//! GET; [`ApiClient::fetch_with_retry`] repeats it until it succeeds or the
//! attempt budget runs out. Only successful responses are cached, so every
//! retry after a failure goes back to the network.

mod error;
mod retry;
mod transport;

pub use error::FetchError;
pub use retry::{RetryMode, RetryPolicy, DEFAULT_MAX_ATTEMPTS};
pub use transport::{HttpTransport, Transport};

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ResponseCache;
use crate::logging::{ErrorLog, TracingErrorLog};

/// Base URL used by the demo binary
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for fetching JSON endpoints relative to a base URL
///
/// The cache belongs to this client alone. Fetching takes `&mut self`, so a
/// single client never has two requests in flight.
pub struct ApiClient<T = HttpTransport> {
    transport: T,
    base_url: String,
    cache: ResponseCache,
    retry: RetryPolicy,
    error_log: Arc<dyn ErrorLog>,
}

impl ApiClient<HttpTransport> {
    /// Creates a client that talks HTTP to `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::new())
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client with a custom transport
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            cache: ResponseCache::new(),
            retry: RetryPolicy::default(),
            error_log: Arc::new(TracingErrorLog),
        }
    }

    /// Replaces the retry policy used by [`fetch_with_retry`](Self::fetch_with_retry)
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Replaces the sink that receives failed attempts
    pub fn with_error_log(mut self, error_log: Arc<dyn ErrorLog>) -> Self {
        self.error_log = error_log;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Read access to the response cache
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Resolves `endpoint` from the cache, or with exactly one request
    ///
    /// # Returns
    /// * `Ok(Value)` - The cached body, or the freshly decoded one (now cached)
    /// * `Err(FetchError)` - The attempt failed; the error has already been
    ///   reported to the error log and nothing was cached
    pub async fn fetch_once(&mut self, endpoint: &str) -> Result<Value, FetchError> {
        if let Some(cached) = self.cache.get(endpoint) {
            debug!(endpoint, "cache hit");
            return Ok(cached.clone());
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "fetching");

        match self.transport.get_json(&url).await {
            Ok(body) => {
                self.cache.insert(endpoint, body.clone());
                Ok(body)
            }
            Err(err) => {
                self.error_log.log_error(endpoint, &err);
                Err(err)
            }
        }
    }

    /// Fetches `endpoint` using the client's retry policy
    pub async fn fetch_with_retry(&mut self, endpoint: &str) -> Result<Value, FetchError> {
        let policy = self.retry;
        self.fetch_with_policy(endpoint, policy).await
    }

    /// Fetches `endpoint` with up to `max_attempts` attempts, retrying every failure
    pub async fn fetch_with_attempts(
        &mut self,
        endpoint: &str,
        max_attempts: u32,
    ) -> Result<Value, FetchError> {
        let policy = RetryPolicy::new(max_attempts);
        self.fetch_with_policy(endpoint, policy).await
    }

    /// Stops at the first success; otherwise returns the last attempt's error
    async fn fetch_with_policy(
        &mut self,
        endpoint: &str,
        policy: RetryPolicy,
    ) -> Result<Value, FetchError> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(endpoint).await {
                Ok(body) => return Ok(body),
                Err(err) if policy.should_retry(attempt, &err) => {
                    debug!(endpoint, attempt, "attempt failed, retrying");
                    attempt += 1;
                }
                Err(err) => {
                    warn!(endpoint, attempts = attempt, "giving up");
                    return Err(err);
                }
            }
        }
    }
}
