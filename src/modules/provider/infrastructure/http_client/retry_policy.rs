//! When and how long to wait before repeating a failed TMDB request

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts after the first one
    pub max_retries: u32,
    pub base_delay: Duration,
    /// Upper bound for both computed and server-requested waits
    pub max_delay: Duration,
    /// Growth factor per attempt; `1.0` keeps the delay constant
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// TMDB allows roughly 40 requests per 10 seconds per key
    pub fn tmdb() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }

    /// No waiting between attempts; for local servers and tests
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            backoff_multiplier: 1.0,
        }
    }

    pub fn calculate_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let delay = retry_after.unwrap_or_else(|| {
            self.base_delay
                .mul_f64(self.backoff_multiplier.powi(attempt as i32))
        });
        delay.min(self.max_delay)
    }
}

/// Wait hints a 429 response may carry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// `Retry-After`, in seconds
    pub retry_after: Option<Duration>,
    /// Time left until the `X-RateLimit-Reset` epoch second
    pub reset_in: Option<Duration>,
}

impl RateLimitInfo {
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let seconds = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
        };

        let reset_in = seconds("x-ratelimit-reset").map(|reset_at| {
            let now = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs();
            Duration::from_secs(reset_at.saturating_sub(now))
        });

        Self {
            retry_after: seconds("retry-after").map(Duration::from_secs),
            reset_in,
        }
    }

    /// `Retry-After` wins over the reset time
    pub fn recommended_delay(&self) -> Option<Duration> {
        self.retry_after.or(self.reset_in)
    }
}

/// Transport failures and 408/425/429/5xx statuses are worth another attempt
pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    match error.status() {
        Some(status) => {
            status.is_server_error() || matches!(status.as_u16(), 408 | 425 | 429)
        }
        None => error.is_timeout() || error.is_connect(),
    }
}
