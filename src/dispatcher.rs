//! Per-market orchestration of the report pipeline.
//!
//! Fetches the account catalog once, groups accounts by market, and runs
//! build, render and delivery for each selected market. The fetch layer
//! swallows its own failures, so the dispatcher sends whatever content was
//! assembled; only mail delivery can abort the run.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::fetcher::ReviewApiClient;
use crate::mailer::{MailerError, ReportSink};
use crate::report::markdown::render_markdown;
use crate::report::{build_market_report, html::markdown_to_html, ReportWindow};
use crate::Account;

/// Accounts grouped by market code, in first-seen order.
///
/// Insertion order is preserved so repeated runs over the same catalog
/// produce reports in the same sequence.
#[derive(Debug, Default)]
pub struct MarketGroups {
    groups: Vec<(String, Vec<Account>)>,
}

impl MarketGroups {
    /// Group a freshly fetched account catalog.
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        let mut grouped = Self::default();
        for account in accounts {
            grouped.insert(account);
        }
        grouped
    }

    fn insert(&mut self, account: Account) {
        match self
            .groups
            .iter_mut()
            .find(|(market, _)| *market == account.market)
        {
            Some((_, accounts)) => accounts.push(account),
            None => self.groups.push((account.market.clone(), vec![account])),
        }
    }

    /// Accounts of one market, when present.
    pub fn get(&self, market: &str) -> Option<&[Account]> {
        self.groups
            .iter()
            .find(|(code, _)| code == market)
            .map(|(_, accounts)| accounts.as_slice())
    }

    /// Iterate markets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Account])> {
        self.groups
            .iter()
            .map(|(market, accounts)| (market.as_str(), accounts.as_slice()))
    }

    /// Number of distinct markets.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no market was discovered.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Run the whole toolchain: fetch accounts, then build and mail one report
/// per selected market.
///
/// A market filter selects a single market when it matches a discovered one;
/// an unknown filter falls through to all markets, like no filter at all.
///
/// # Errors
/// Only mail delivery failures propagate.
pub async fn run_reports(
    client: &ReviewApiClient,
    sink: &dyn ReportSink,
    market_filter: Option<&str>,
    today: NaiveDate,
) -> Result<(), MailerError> {
    let accounts = client.accounts().await;
    let groups = MarketGroups::from_accounts(accounts);
    if groups.is_empty() {
        warn!("no accounts discovered, nothing to report");
        return Ok(());
    }

    let window = ReportWindow::trailing_week(today);
    info!(
        "reporting window {} to {} across {} market(s)",
        window.start,
        window.end,
        groups.len()
    );

    match market_filter.and_then(|market| groups.get(market).map(|accounts| (market, accounts))) {
        Some((market, accounts)) => {
            send_market_report(client, sink, market, accounts, &window).await?;
        }
        None => {
            for (market, accounts) in groups.iter() {
                send_market_report(client, sink, market, accounts, &window).await?;
            }
        }
    }

    Ok(())
}

async fn send_market_report(
    client: &ReviewApiClient,
    sink: &dyn ReportSink,
    market: &str,
    accounts: &[Account],
    window: &ReportWindow,
) -> Result<(), MailerError> {
    let report = build_market_report(client, market, accounts, window).await;
    let markdown = render_markdown(&report);
    let html = markdown_to_html(&markdown);
    let title = format!("App Annie Report ({market})");
    sink.deliver(&title, &html, &markdown).await
}
