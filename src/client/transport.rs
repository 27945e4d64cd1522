//! Network transport used by the API client
//!
//! The client only needs "GET this URL and give me JSON". Keeping that behind a
//! trait lets the caching and retry logic run against a scripted transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::FetchError;

/// Performs a single GET and decodes the body as JSON
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` once. No caching, no retries.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Transport backed by a `reqwest` client
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest` client
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Creates a transport with a custom HTTP client (timeouts, proxies, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Creates a transport whose requests give up after `timeout`
    ///
    /// With `None` the `reqwest` defaults apply (no overall request timeout).
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // Read as text first so a malformed body surfaces as Decode, not Transport
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).get_json(url).await
    }
}
