//! # App Annie Review Reporter Library
//!
//! Fetches app-store review data from the App Annie analytics API across all
//! configured accounts, aggregates the last seven days of reviews per market,
//! and mails one HTML report per market to a fixed recipient list.
//!
//! ## Architecture
//!
//! The library is organized into several core modules:
//!
//! - [`config`] - Environment-driven settings (API token, SMTP sender, recipients)
//! - [`fetcher`] - Rate-limited, paginated API client for accounts, apps and reviews
//! - [`report`] - Aggregation into a typed section tree and markdown/HTML rendering
//! - [`mailer`] - SMTP delivery of rendered reports
//! - [`dispatcher`] - Per-market orchestration of the whole pipeline
//!
//! ## Error model
//!
//! Fetch-layer failures are absorbed where they occur and degrade to "less
//! data in the report"; only mail delivery failures abort a run.

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// CLI surface
pub mod cli;

/// Environment-driven settings
pub mod config;

/// Per-market orchestration
pub mod dispatcher;

/// Rate-limited, paginated API client
pub mod fetcher;

/// SMTP report delivery
pub mod mailer;

/// Report aggregation and rendering
pub mod report;

// Re-export commonly used types
pub use fetcher::ReviewApiClient;
pub use report::ReportWindow;

/// One App Annie account, as returned by `/accounts`.
///
/// Field names match the wire payload. Accounts are immutable once fetched
/// and live only for the duration of a single report run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Account identifier
    pub account_id: i64,
    /// Display name
    pub account_name: String,
    /// Publisher the account belongs to
    pub publisher_name: String,
    /// Market code (e.g. "ios")
    pub market: String,
    /// Product vertical (e.g. "apps", "books")
    pub vertical: String,
    /// Account status as reported by the API
    pub account_status: String,
}

/// One product of an account, as returned by `/accounts/{id}/products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct App {
    /// Product identifier
    pub product_id: i64,
    /// Display name
    pub product_name: String,
    /// Device-class qualifier, when the API provides one
    #[serde(default)]
    pub devices: Option<String>,
    /// Product status as reported by the API
    pub status: String,
}

/// One app-store review inside a report window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Review date
    pub date: NaiveDate,
    /// Star rating, nominally 1 to 5; rendering clamps to [0, 5]
    pub rating: u8,
    /// Review title
    pub title: String,
    /// Review body
    pub text: String,
    /// App version the review was left on
    pub version: String,
    /// Reviewer country code
    pub country: String,
    /// Reviewer display name
    pub reviewer: String,
}
