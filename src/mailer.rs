//! SMTP delivery of rendered reports.
//!
//! The dispatcher talks to a [`ReportSink`] so tests can swap the transport
//! out; [`SmtpMailer`] is the production implementation. Unlike the fetch
//! layer, delivery failures are fatal and abort the run.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::SmtpSender;

/// Mail delivery errors
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    /// A sender or recipient address does not parse
    #[error("invalid mailbox address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport failure
    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Destination for one rendered report.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Deliver a report with the given subject.
    ///
    /// `text_body` is the plain-text alternative to `html_body`.
    async fn deliver(
        &self,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), MailerError>;
}

/// STARTTLS SMTP sink mailing each report to the configured recipients.
pub struct SmtpMailer {
    sender: SmtpSender,
    receivers: Vec<String>,
}

impl SmtpMailer {
    /// Create a mailer for a sender identity and recipient list.
    pub fn new(sender: SmtpSender, receivers: Vec<String>) -> Self {
        Self { sender, receivers }
    }
}

#[async_trait]
impl ReportSink for SmtpMailer {
    async fn deliver(
        &self,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), MailerError> {
        let from: Mailbox = self.sender.email.parse()?;

        let mut builder = Message::builder().from(from).subject(subject);
        for receiver in &self.receivers {
            builder = builder.to(receiver.parse()?);
        }

        let email = builder.multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_body.to_string()),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
        )?;

        let mut relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.sender.server)?
            .port(self.sender.port);

        // Anonymous submission is allowed when no credentials are configured.
        if let (Some(login), Some(password)) = (&self.sender.login, &self.sender.password) {
            relay = relay.credentials(Credentials::new(login.clone(), password.clone()));
        }

        let transport: AsyncSmtpTransport<Tokio1Executor> = relay.build();
        transport.send(email).await?;

        info!(
            subject = %subject,
            recipients = self.receivers.len(),
            "report email sent"
        );
        Ok(())
    }
}
