//! CLI surface

pub mod error;

pub use error::CliError;

use clap::Parser;

/// App Annie review report mailer
#[derive(Parser, Debug)]
#[command(name = "appannie-reporter")]
#[command(about = "Mail the last week of app-store reviews, one report per market", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Market code to report on (e.g. "ios"); all markets when omitted
    pub market: Option<String>,
}
