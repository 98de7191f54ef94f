//! Contact-form delivery via SMTP.
//!
//! [`SmtpMailer`] wraps the `lettre` async SMTP transport. When `SMTP_HOST`
//! is not set, [`SmtpConfig::from_env`] returns `None` and [`LogMailer`] is
//! used instead: messages are logged and accepted.

use std::sync::Arc;

use async_trait::async_trait;
use folio_core::contact::ContactMessage;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// A sender, recipient or reply-to address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// SmtpConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "noreply@portfolio.local";

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set.
    ///
    /// | Variable        | Required | Default                    |
    /// |-----------------|----------|----------------------------|
    /// | `SMTP_HOST`     | yes      | --                         |
    /// | `SMTP_PORT`     | no       | `587`                      |
    /// | `SMTP_FROM`     | no       | `noreply@portfolio.local`  |
    /// | `SMTP_USER`     | no       | --                         |
    /// | `SMTP_PASSWORD` | no       | --                         |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok().filter(|h| !h.is_empty())?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// Mailers
// ---------------------------------------------------------------------------

/// Delivers a validated contact message to the site owner.
#[async_trait]
pub trait ContactMailer: Send + Sync {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Sends contact messages to `recipient` via SMTP with reply-to set to the
/// visitor.
pub struct SmtpMailer {
    config: SmtpConfig,
    recipient: String,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig, recipient: String) -> Self {
        Self { config, recipient }
    }

    fn build_message(&self, message: &ContactMessage) -> Result<Message, MailError> {
        Message::builder()
            .from(self.config.from_address.parse()?)
            .to(self.recipient.parse()?)
            .reply_to(message.email.trim().parse()?)
            .subject(message.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl ContactMailer for SmtpMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        let email = self.build_message(message)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        transport_builder.build().send(email).await?;

        tracing::info!(from = %message.email, "Contact email sent");
        Ok(())
    }
}

/// Used when SMTP is not configured. Logs and accepts every message.
pub struct LogMailer;

#[async_trait]
impl ContactMailer for LogMailer {
    async fn send_contact(&self, message: &ContactMessage) -> Result<(), MailError> {
        tracing::warn!(
            from = %message.email,
            subject = %message.subject_line(),
            "SMTP not configured, contact message logged only",
        );
        Ok(())
    }
}

/// Pick the mailer for the given configuration.
pub fn build_mailer(smtp: Option<SmtpConfig>, recipient: Option<String>) -> Arc<dyn ContactMailer> {
    match (smtp, recipient) {
        (Some(config), Some(recipient)) => Arc::new(SmtpMailer::new(config, recipient)),
        _ => Arc::new(LogMailer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            smtp_host: "smtp.example.com".into(),
            smtp_port: 587,
            from_address: "noreply@example.com".into(),
            smtp_user: None,
            smtp_password: None,
        }
    }

    fn message(email: &str) -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: email.into(),
            subject: "Hello".into(),
            message: "Nice portfolio".into(),
        }
    }

    #[test]
    fn builds_message_with_reply_to_sender() {
        let mailer = SmtpMailer::new(config(), "owner@example.com".into());
        let built = mailer.build_message(&message("ada@example.com")).unwrap();
        let raw = String::from_utf8(built.formatted()).unwrap();
        assert!(raw.contains("Reply-To: ada@example.com"));
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Subject: [Portfolio Contact] Hello"));
    }

    #[test]
    fn invalid_reply_to_is_an_address_error() {
        let mailer = SmtpMailer::new(config(), "owner@example.com".into());
        let result = mailer.build_message(&message("not-an-address"));
        assert!(matches!(result, Err(MailError::Address(_))));
    }

    #[tokio::test]
    async fn log_mailer_accepts_messages() {
        assert!(LogMailer.send_contact(&message("a@b.co")).await.is_ok());
    }
}
