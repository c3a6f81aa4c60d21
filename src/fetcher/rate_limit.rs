//! Dual-window request throttling.
//!
//! The App Annie API enforces per-minute and per-day request quotas. The
//! limiter tracks one counter per window and suspends the calling task when a
//! counter exceeds its ceiling, then resets that counter. This is a
//! conservative single-process throttle: it does not coordinate across
//! processes, and a burst can still overshoot a ceiling within one check
//! window, so the ceilings are soft guards rather than hard guarantees.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Maximum requests per day before a suspension is induced.
pub const DAY_REQUEST_LIMIT: u32 = 1000;

/// Maximum requests per minute before a suspension is induced.
pub const MINUTE_REQUEST_LIMIT: u32 = 30;

const DAY_PAUSE: Duration = Duration::from_secs(86_400);
const MINUTE_PAUSE: Duration = Duration::from_secs(60);

/// Request throttle with independent per-minute and per-day windows.
///
/// Counters live in the limiter object and are stored as atomics so the
/// limiter can be shared behind the HTTP client.
#[derive(Debug, Default)]
pub struct RateLimiter {
    minute_requests: AtomicU32,
    day_requests: AtomicU32,
}

impl RateLimiter {
    /// Create a limiter with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend until another request may be issued.
    ///
    /// Checked before every outbound request. Each window is handled
    /// independently: exceeding the day ceiling sleeps 24 hours and resets
    /// the day counter; exceeding the minute ceiling sleeps 60 seconds and
    /// resets the minute counter.
    pub async fn throttle(&self) {
        if self.day_requests.load(Ordering::Relaxed) > DAY_REQUEST_LIMIT {
            warn!("daily request ceiling exceeded, suspending for 24 hours");
            sleep(DAY_PAUSE).await;
            self.day_requests.store(0, Ordering::Relaxed);
        }

        if self.minute_requests.load(Ordering::Relaxed) > MINUTE_REQUEST_LIMIT {
            warn!("per-minute request ceiling exceeded, suspending for 60 seconds");
            sleep(MINUTE_PAUSE).await;
            self.minute_requests.store(0, Ordering::Relaxed);
        }
    }

    /// Count one completed request attempt, successful or failed.
    pub fn record(&self) {
        self.minute_requests.fetch_add(1, Ordering::Relaxed);
        self.day_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Requests counted in the current minute window.
    pub fn minute_requests(&self) -> u32 {
        self.minute_requests.load(Ordering::Relaxed)
    }

    /// Requests counted in the current day window.
    pub fn day_requests(&self) -> u32 {
        self.day_requests.load(Ordering::Relaxed)
    }
}
