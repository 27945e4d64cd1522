//! Retry policy for endpoint fetches
//!
//! Attempts are repeated back to back: there is no backoff and no jitter.

use super::FetchError;

/// Default number of attempts per fetch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Which failures are worth another attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryMode {
    /// Retry every failure until the attempt budget runs out
    #[default]
    All,
    /// Give up immediately on terminal failures (4xx client errors)
    TransientOnly,
}

impl RetryMode {
    /// Parses a retry mode name, case-insensitively
    ///
    /// Accepts `all`, and `transient` / `transient-only`.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(RetryMode::All),
            "transient" | "transient-only" | "transient_only" => Some(RetryMode::TransientOnly),
            _ => None,
        }
    }
}

/// How many times a fetch is attempted, and which failures are retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    mode: RetryMode,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            mode: RetryMode::All,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `max_attempts` attempts in total
    ///
    /// A value of 0 is raised to 1: every fetch makes at least one attempt.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            mode: RetryMode::All,
        }
    }

    /// Sets which failures are retried
    pub fn with_mode(mut self, mode: RetryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn mode(&self) -> RetryMode {
        self.mode
    }

    /// Whether `error`, raised by attempt number `attempt` (1-based), should be retried
    pub fn should_retry(&self, attempt: u32, error: &FetchError) -> bool {
        if attempt >= self.max_attempts {
            return false;
        }
        match self.mode {
            RetryMode::All => true,
            RetryMode::TransientOnly => error.is_transient(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 3);
        assert_eq!(policy.mode(), RetryMode::All);
    }

    #[test]
    fn test_zero_attempts_is_raised_to_one() {
        assert_eq!(RetryPolicy::new(0).max_attempts(), 1);
    }

    #[test]
    fn test_retries_until_budget_exhausted() {
        let policy = RetryPolicy::new(3);
        let err = FetchError::HttpStatus { status: 500 };

        assert!(policy.should_retry(1, &err));
        assert!(policy.should_retry(2, &err));
        assert!(!policy.should_retry(3, &err));
    }

    #[test]
    fn test_all_mode_retries_client_errors() {
        let policy = RetryPolicy::new(3);
        assert!(policy.should_retry(1, &FetchError::HttpStatus { status: 404 }));
    }

    #[test]
    fn test_transient_mode_stops_on_client_errors() {
        let policy = RetryPolicy::new(3).with_mode(RetryMode::TransientOnly);

        assert!(!policy.should_retry(1, &FetchError::HttpStatus { status: 404 }));
        assert!(policy.should_retry(1, &FetchError::HttpStatus { status: 503 }));
        assert!(policy.should_retry(1, &FetchError::Transport("reset".into())));
    }

    #[test]
    fn test_retry_mode_from_name() {
        assert_eq!(RetryMode::from_name("all"), Some(RetryMode::All));
        assert_eq!(RetryMode::from_name("ALL"), Some(RetryMode::All));
        assert_eq!(
            RetryMode::from_name("transient"),
            Some(RetryMode::TransientOnly)
        );
        assert_eq!(
            RetryMode::from_name("transient-only"),
            Some(RetryMode::TransientOnly)
        );
        assert_eq!(RetryMode::from_name("sometimes"), None);
    }
}
