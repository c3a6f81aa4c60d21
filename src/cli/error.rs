//! CLI error types and conversions

use crate::config::ConfigError;
use crate::mailer::MailerError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Mail delivery error
    #[error("mail error: {0}")]
    Mail(#[from] MailerError),
}
