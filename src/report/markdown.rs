//! Markdown rendering of a market report.
//!
//! Pure string assembly over the section tree. Layout per account: a level-1
//! heading with publisher and status lines, one level-2 subsection per
//! reviewed app with a review table, and a `***` separator after every
//! account whether or not it produced content.

use std::fmt::Write;

use super::model::MarketReport;

/// Width of the rating bar in glyphs.
const BAR_WIDTH: usize = 5;

/// Render a market report to markdown text.
pub fn render_markdown(report: &MarketReport) -> String {
    let mut text = String::new();

    for section in &report.accounts {
        if section.has_content() {
            let account = &section.account;
            let _ = write!(
                text,
                "# {} ({})\n\n**Publisher: {}**\n\n**Status:** {}\n",
                account.account_name, account.market, account.publisher_name, account.account_status
            );

            for app_section in &section.apps {
                let app = &app_section.app;
                match &app.devices {
                    Some(devices) => {
                        let _ = write!(text, "\n## {} ({})\n\n", app.product_name, devices);
                    }
                    None => {
                        let _ = write!(text, "\n## {}\n\n", app.product_name);
                    }
                }
                let _ = write!(text, "**Status:** {}\n\n", app.status);

                text.push_str("| Date | Rating | Title | Text | Version | Country | Reviewer |\n");
                text.push_str("| ---- | :----: | ----- | ---- | ------- | ------- | -------- |\n");
                for review in &app_section.reviews {
                    let _ = writeln!(
                        text,
                        "| {} | {} | {} | {} | {} | {} | {} |",
                        review.date,
                        rating_bar(review.rating),
                        cell(&review.title),
                        cell(&review.text),
                        cell(&review.version),
                        cell(&review.country),
                        cell(&review.reviewer),
                    );
                }
                text.push('\n');
            }
        }

        text.push_str("***\n\n");
    }

    text
}

/// Fixed-width star bar for a rating: filled glyphs, then empty glyphs.
///
/// Ratings above the bar width are clamped; the API nominally reports 1 to 5.
pub fn rating_bar(rating: u8) -> String {
    let filled = usize::from(rating).min(BAR_WIDTH);
    let mut bar = "★".repeat(filled);
    bar.push_str(&"☆".repeat(BAR_WIDTH - filled));
    bar
}

/// Make a value safe for a markdown table cell.
///
/// Review text is user-controlled; pipes would split the cell and newlines
/// would end the row.
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace(['\r', '\n'], " ")
}
