//! HTTP transport for the App Annie API.
//!
//! One client instance serves the whole run: it owns the base URL, the bearer
//! token and the rate limiter, and exposes a single-page GET that the
//! pagination layer drives.

use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::fetcher::rate_limit::RateLimiter;
use crate::fetcher::{FetcherError, FetcherResult};

/// Authenticated App Annie API client.
pub struct ReviewApiClient {
    http: Client,
    base_url: String,
    api_key: String,
    limiter: Arc<RateLimiter>,
}

impl ReviewApiClient {
    /// Create a client with a fresh rate limiter.
    ///
    /// `base_url` must not carry a trailing slash; request paths start with
    /// one.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_limiter(base_url, api_key, Arc::new(RateLimiter::new()))
    }

    /// Create a client sharing an existing rate limiter.
    pub fn with_limiter(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            limiter,
        }
    }

    /// The rate limiter backing this client.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Fetch one page as raw JSON.
    ///
    /// Consults the rate limiter before the request and counts the attempt
    /// afterwards, successful or not. A non-2xx status is logged but the body
    /// is still decoded: the API reports application-level failures inside
    /// the envelope, and the pagination layer stops on those.
    ///
    /// # Errors
    /// Returns `FetcherError::Network` when the request cannot be sent and
    /// `FetcherError::Parse` when the body is not JSON.
    pub async fn get_page(&self, path: &str) -> FetcherResult<Value> {
        self.limiter.throttle().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let result = self.http.get(&url).bearer_auth(&self.api_key).send().await;
        self.limiter.record();

        let response = result.map_err(|e| FetcherError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("request failed: {} {}", url, status);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetcherError::Parse(e.to_string()))
    }
}
