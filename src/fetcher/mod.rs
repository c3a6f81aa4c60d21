//! Rate-limited, paginated App Annie API client.
//!
//! The fetch layer never aborts a report run: transport and decode failures
//! are logged and surface as truncated result sets, so a degraded report is
//! still produced. Envelope-level API errors stop pagination silently.

pub mod http;
pub mod pagination;
pub mod rate_limit;
pub mod resources;

pub use http::ReviewApiClient;
pub use rate_limit::RateLimiter;

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Network error (connection failure, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed as JSON
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;
