//! Main entry point for the appannie-reporter CLI

use appannie_reporter::cli::{Cli, CliError};
use appannie_reporter::config::Settings;
use appannie_reporter::dispatcher;
use appannie_reporter::fetcher::ReviewApiClient;
use appannie_reporter::mailer::SmtpMailer;
use chrono::Utc;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber with optional JSON formatting
fn init_tracing() {
    // Check if JSON output is requested via environment variable
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("appannie_reporter=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::from_env()?;

    let client = ReviewApiClient::new(settings.base_url.clone(), settings.api_key.clone());
    let mailer = SmtpMailer::new(settings.sender, settings.receivers);
    let today = Utc::now().date_naive();

    dispatcher::run_reports(&client, &mailer, cli.market.as_deref(), today).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("report run failed: {e}");
        std::process::exit(1);
    }
}
