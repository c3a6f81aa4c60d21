//! Review report aggregation and rendering.
//!
//! Aggregation walks accounts, apps and reviews into a typed section tree
//! ([`model`]); rendering turns that tree into markdown text ([`markdown`])
//! and markdown into an HTML document ([`html`]). Keeping the two phases
//! apart lets the aggregation logic be tested without string matching and
//! the renderers without network access.

pub mod html;
pub mod markdown;
pub mod model;

use chrono::{Days, NaiveDate};
use tracing::{debug, info};

use crate::fetcher::ReviewApiClient;
use crate::Account;

pub use model::{AccountSection, AppSection, MarketReport};

/// Inclusive review date window for one report build.
///
/// Computed once per invocation so every account in a report shares the same
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    /// First day included in the report
    pub start: NaiveDate,
    /// Last day included in the report
    pub end: NaiveDate,
}

impl ReportWindow {
    /// The trailing week ending today: `[today - 7 days, today]`, both
    /// inclusive.
    pub fn trailing_week(today: NaiveDate) -> Self {
        Self {
            start: today - Days::new(7),
            end: today,
        }
    }
}

/// Build the section tree for one market.
///
/// For each account the apps are fetched, and for each app the reviews in
/// the window. The skip-if-empty rules are applied while building: an app
/// without reviews contributes no section, and an account section carries
/// content only when at least one app section survived. Every account still
/// yields a section record so the renderer can emit its trailing separator.
pub async fn build_market_report(
    client: &ReviewApiClient,
    market: &str,
    accounts: &[Account],
    window: &ReportWindow,
) -> MarketReport {
    info!(
        "building report for market '{}' over {} account(s)",
        market,
        accounts.len()
    );

    let start = window.start.to_string();
    let end = window.end.to_string();

    let mut sections = Vec::with_capacity(accounts.len());
    for account in accounts {
        let apps = client.apps(account.account_id).await;
        debug!(
            "account {} ('{}') has {} app(s)",
            account.account_id,
            account.account_name,
            apps.len()
        );

        let mut app_sections = Vec::new();
        for app in apps {
            let reviews = client
                .reviews(
                    app.product_id,
                    &account.vertical,
                    &account.market,
                    Some(&start),
                    Some(&end),
                )
                .await;
            if reviews.is_empty() {
                continue;
            }
            app_sections.push(AppSection { app, reviews });
        }

        sections.push(AccountSection {
            account: account.clone(),
            apps: app_sections,
        });
    }

    MarketReport {
        market: market.to_string(),
        window: *window,
        accounts: sections,
    }
}
