//! Typed operations over the three paginated API resources.
//!
//! Each operation is a thin specialization of [`collect_pages`]: a path
//! template, an entity key, and the shared HTTP client.

use tracing::debug;

use crate::fetcher::pagination::collect_pages;
use crate::fetcher::ReviewApiClient;
use crate::{Account, App, Review};

impl ReviewApiClient {
    /// Fetch all accounts visible to the API key.
    pub async fn accounts(&self) -> Vec<Account> {
        collect_pages("/accounts", "accounts", |path| async move {
            self.get_page(&path).await
        })
        .await
    }

    /// Fetch all products of one account.
    pub async fn apps(&self, account_id: i64) -> Vec<App> {
        let path = format!("/accounts/{account_id}/products");
        collect_pages(&path, "products", |path| async move {
            self.get_page(&path).await
        })
        .await
    }

    /// Fetch an app's reviews inside a date window.
    ///
    /// Both bounds are optional independently; only present bounds appear in
    /// the query string.
    pub async fn reviews(
        &self,
        product_id: i64,
        vertical: &str,
        market: &str,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Vec<Review> {
        let path = review_path(vertical, market, product_id, start, end);
        debug!("fetching reviews for product {}", product_id);
        collect_pages(&path, "reviews", |path| async move {
            self.get_page(&path).await
        })
        .await
    }
}

/// Build the review resource path for one product.
///
/// Shape: `/{vertical}/{market}/{singular vertical}/{product_id}/reviews`,
/// with `start_date` and `end_date` appended only when present.
pub fn review_path(
    vertical: &str,
    market: &str,
    product_id: i64,
    start: Option<&str>,
    end: Option<&str>,
) -> String {
    let mut path = format!(
        "/{}/{}/{}/{}/reviews",
        vertical,
        market,
        singular(vertical),
        product_id
    );

    if let Some(start) = start {
        path.push_str("?start_date=");
        path.push_str(start);
    }
    if let Some(end) = end {
        path.push(if start.is_some() { '&' } else { '?' });
        path.push_str("end_date=");
        path.push_str(end);
    }

    path
}

/// Singular form of a vertical, derived by dropping one trailing character
/// ("apps" becomes "app").
fn singular(vertical: &str) -> &str {
    match vertical.char_indices().next_back() {
        Some((idx, _)) => &vertical[..idx],
        None => vertical,
    }
}
