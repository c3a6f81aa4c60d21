//! Typed section tree for one market report.

use crate::{Account, App, Review};

use super::ReportWindow;

/// Fully aggregated report for one market, ready to render.
#[derive(Debug, Clone)]
pub struct MarketReport {
    /// Market code the report covers
    pub market: String,
    /// Review window shared by every section
    pub window: ReportWindow,
    /// One section per account in the market, in discovery order
    pub accounts: Vec<AccountSection>,
}

/// Report section for one account.
///
/// Constructed for every account in the market; `apps` holds only the app
/// sections that survived the review filter.
#[derive(Debug, Clone)]
pub struct AccountSection {
    /// The account this section describes
    pub account: Account,
    /// App sections with at least one review each
    pub apps: Vec<AppSection>,
}

impl AccountSection {
    /// Whether the section renders a heading block.
    ///
    /// Accounts without any reviewed app contribute only their trailing
    /// separator.
    pub fn has_content(&self) -> bool {
        !self.apps.is_empty()
    }
}

/// Report subsection for one app with its window's reviews.
#[derive(Debug, Clone)]
pub struct AppSection {
    /// The app this subsection describes
    pub app: App,
    /// Reviews in API order
    pub reviews: Vec<Review>,
}
