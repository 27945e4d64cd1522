//! Error types for fetching endpoints

use thiserror::Error;

/// Errors that can occur when fetching an endpoint
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// The request never produced a response (DNS, connection refused, timeout)
    #[error("HTTP request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The response body is not valid JSON
    #[error("Failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(err))
    }
}

impl FetchError {
    /// Whether repeating the same request could plausibly succeed
    ///
    /// Client errors (4xx) are terminal, except 408 Request Timeout and
    /// 429 Too Many Requests. Everything else is treated as transient.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::HttpStatus { status } => match *status {
                408 | 429 => true,
                400..=499 => false,
                _ => true,
            },
            FetchError::Transport(_) | FetchError::Decode(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> FetchError {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        FetchError::from(err)
    }

    #[test]
    fn test_http_status_message_includes_status() {
        let err = FetchError::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_transport_message_includes_cause() {
        let err = FetchError::Transport("connection refused".into());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_decode_error_is_decode_variant() {
        assert!(matches!(decode_error(), FetchError::Decode(_)));
        assert!(decode_error().to_string().starts_with("Failed to parse JSON"));
    }

    #[test]
    fn test_client_errors_are_terminal() {
        for status in [400, 401, 403, 404, 422] {
            assert!(
                !FetchError::HttpStatus { status }.is_transient(),
                "{} should not be transient",
                status
            );
        }
    }

    #[test]
    fn test_server_errors_and_throttling_are_transient() {
        for status in [408, 429, 500, 502, 503, 504] {
            assert!(
                FetchError::HttpStatus { status }.is_transient(),
                "{} should be transient",
                status
            );
        }
        assert!(FetchError::Transport("timed out".into()).is_transient());
        assert!(decode_error().is_transient());
    }
}
