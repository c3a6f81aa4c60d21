//! Unit tests for report rendering over hand-built section trees.

use appannie_reporter::report::markdown::{rating_bar, render_markdown};
use appannie_reporter::report::{AccountSection, AppSection, MarketReport, ReportWindow};
use appannie_reporter::{Account, App, Review};
use chrono::NaiveDate;

fn window() -> ReportWindow {
    ReportWindow::trailing_week(NaiveDate::from_ymd_opt(2024, 5, 15).unwrap())
}

fn account(id: i64, name: &str) -> Account {
    Account {
        account_id: id,
        account_name: name.to_string(),
        publisher_name: "Acme Inc".to_string(),
        market: "ios".to_string(),
        vertical: "apps".to_string(),
        account_status: "active".to_string(),
    }
}

fn app(id: i64, name: &str, devices: Option<&str>) -> App {
    App {
        product_id: id,
        product_name: name.to_string(),
        devices: devices.map(str::to_owned),
        status: "live".to_string(),
    }
}

fn review(day: u32, rating: u8, title: &str, text: &str) -> Review {
    Review {
        date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
        rating,
        title: title.to_string(),
        text: text.to_string(),
        version: "2.1.0".to_string(),
        country: "US".to_string(),
        reviewer: "coyote".to_string(),
    }
}

fn report(accounts: Vec<AccountSection>) -> MarketReport {
    MarketReport {
        market: "ios".to_string(),
        window: window(),
        accounts,
    }
}

#[test]
fn rating_bar_matches_rating_for_the_whole_range() {
    assert_eq!(rating_bar(0), "☆☆☆☆☆");
    assert_eq!(rating_bar(1), "★☆☆☆☆");
    assert_eq!(rating_bar(2), "★★☆☆☆");
    assert_eq!(rating_bar(3), "★★★☆☆");
    assert_eq!(rating_bar(4), "★★★★☆");
    assert_eq!(rating_bar(5), "★★★★★");
}

#[test]
fn one_reviewed_account_and_one_empty_account() {
    // The reviewed account renders a full section; the app-less account
    // contributes nothing but its trailing separator.
    let markdown = render_markdown(&report(vec![
        AccountSection {
            account: account(1, "Acme"),
            apps: vec![AppSection {
                app: app(10, "Anvil", None),
                reviews: vec![
                    review(10, 5, "Great", "Works"),
                    review(12, 2, "Meh", "Crashes"),
                ],
            }],
        },
        AccountSection {
            account: account(2, "Empty Shell"),
            apps: Vec::new(),
        },
    ]));

    assert_eq!(markdown.matches("# Acme (ios)").count(), 1);
    assert!(!markdown.contains("Empty Shell"));
    assert_eq!(markdown.matches("\n## ").count(), 1);
    assert_eq!(markdown.matches("***\n\n").count(), 2, "one separator per account");

    // Two body rows under one header and one alignment row.
    assert_eq!(markdown.matches("| 2024-05-").count(), 2);
    assert!(markdown.contains("| 2024-05-10 | ★★★★★ | Great | Works | 2.1.0 | US | coyote |"));
    assert!(markdown.contains("| 2024-05-12 | ★★☆☆☆ | Meh | Crashes | 2.1.0 | US | coyote |"));
}

#[test]
fn account_heading_carries_publisher_and_status_lines() {
    let markdown = render_markdown(&report(vec![AccountSection {
        account: account(1, "Acme"),
        apps: vec![AppSection {
            app: app(10, "Anvil", None),
            reviews: vec![review(10, 3, "Fine", "Okay")],
        }],
    }]));

    assert!(markdown.contains("**Publisher: Acme Inc**"));
    assert!(markdown.contains("**Status:** active"));
    assert!(markdown.contains("**Status:** live"));
}

#[test]
fn app_heading_includes_device_qualifier_when_present() {
    let markdown = render_markdown(&report(vec![AccountSection {
        account: account(1, "Acme"),
        apps: vec![
            AppSection {
                app: app(10, "Anvil", Some("iphone-and-ipad")),
                reviews: vec![review(10, 4, "Good", "Yes")],
            },
            AppSection {
                app: app(11, "Rocket", None),
                reviews: vec![review(11, 1, "Bad", "No")],
            },
        ],
    }]));

    assert!(markdown.contains("## Anvil (iphone-and-ipad)\n"));
    assert!(markdown.contains("## Rocket\n"));
}

#[test]
fn account_with_only_filtered_apps_renders_separator_only() {
    // All of this account's apps were dropped for having no reviews in the
    // window, so no heading block appears at all.
    let markdown = render_markdown(&report(vec![AccountSection {
        account: account(1, "Quiet"),
        apps: Vec::new(),
    }]));

    assert_eq!(markdown, "***\n\n");
}

#[test]
fn review_text_cannot_break_the_table() {
    let markdown = render_markdown(&report(vec![AccountSection {
        account: account(1, "Acme"),
        apps: vec![AppSection {
            app: app(10, "Anvil", None),
            reviews: vec![review(10, 4, "a|b", "line one\nline two")],
        }],
    }]));

    assert!(markdown.contains("| a\\|b | line one line two |"));
}

#[test]
fn empty_market_renders_to_nothing() {
    assert_eq!(render_markdown(&report(Vec::new())), "");
}
