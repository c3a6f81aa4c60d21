//! Environment-driven settings for the reporter.
//!
//! The API credentials, SMTP sender and recipient list are external
//! collaborators of the pipeline; everything is read once at startup.

use std::env;

/// Default App Annie API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.appannie.com/v1.2";

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),

    /// An environment variable holds an unusable value
    #[error("invalid value for {0}: {1}")]
    InvalidVar(&'static str, String),

    /// The recipient list resolved to zero addresses
    #[error("REPORT_RECIPIENTS contains no addresses")]
    NoRecipients,
}

/// SMTP sender identity and server coordinates.
#[derive(Debug, Clone)]
pub struct SmtpSender {
    /// From address for outgoing reports
    pub email: String,
    /// SMTP server hostname
    pub server: String,
    /// SMTP submission port
    pub port: u16,
    /// Optional login; credentials are used only when login and password are both set
    pub login: Option<String>,
    /// Optional password
    pub password: Option<String>,
}

/// Complete runtime settings for one report run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer token for the App Annie API
    pub api_key: String,
    /// API base URL, without a trailing slash
    pub base_url: String,
    /// SMTP sender identity
    pub sender: SmtpSender,
    /// Report recipients
    pub receivers: Vec<String>,
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// # Required Environment Variables
    /// - `APPANNIE_API_KEY`: bearer token for the API
    /// - `SMTP_SENDER`: from address for outgoing mail
    /// - `SMTP_SERVER`: SMTP server hostname
    /// - `REPORT_RECIPIENTS`: comma-separated recipient addresses
    ///
    /// # Optional Environment Variables
    /// - `APPANNIE_BASE_URL`: API base URL (default: production endpoint)
    /// - `SMTP_PORT`: submission port (default: 587)
    /// - `SMTP_LOGIN` / `SMTP_PASSWORD`: SMTP credentials, used only when both are set
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = require("APPANNIE_API_KEY")?;
        let base_url =
            env::var("APPANNIE_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let email = require("SMTP_SENDER")?;
        let server = require("SMTP_SERVER")?;
        let port = match env::var("SMTP_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidVar("SMTP_PORT", e.to_string()))?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        let receivers = parse_receivers(&require("REPORT_RECIPIENTS")?);
        if receivers.is_empty() {
            return Err(ConfigError::NoRecipients);
        }

        Ok(Self {
            api_key,
            base_url,
            sender: SmtpSender {
                email,
                server,
                port,
                login: optional("SMTP_LOGIN"),
                password: optional("SMTP_PASSWORD"),
            },
            receivers,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Split a comma-separated recipient list, trimming whitespace and dropping
/// empty entries.
pub fn parse_receivers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|addr| !addr.is_empty())
        .map(str::to_owned)
        .collect()
}
