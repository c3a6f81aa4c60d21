//! Markdown to HTML document transform.

use pulldown_cmark::{html, Options, Parser};

/// Convert markdown text to an HTML document body.
///
/// Pure transform; the table extension is enabled because review tables are
/// the bulk of every report.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
