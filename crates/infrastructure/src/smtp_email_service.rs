//! SMTP email service using the `lettre` crate.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use sedapal_application::EmailService;
use sedapal_core::{AppError, AppResult};
use tracing::debug;

/// SMTP email service configuration.
#[derive(Clone)]
pub struct SmtpEmailConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP username.
    pub username: String,
    /// SMTP password.
    pub password: String,
    /// Sender email address.
    pub from_address: String,
}

/// Production email service using SMTP with STARTTLS.
#[derive(Clone)]
pub struct SmtpEmailService {
    from: Mailbox,
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Creates a new SMTP email service.
    ///
    /// The sender address is validated and the transport is built once so
    /// that misconfiguration surfaces at startup.
    pub fn new(config: SmtpEmailConfig) -> AppResult<Self> {
        let from = config
            .from_address
            .parse::<Mailbox>()
            .map_err(|error| AppError::Internal(format!("invalid from address: {error}")))?;

        let credentials = Credentials::new(config.username, config.password);

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|error| {
                AppError::Internal(format!("failed to create SMTP transport: {error}"))
            })?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self { from, mailer })
    }

    fn build_message(
        &self,
        to: &[String],
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<Message> {
        let mut builder = Message::builder().from(self.from.clone()).subject(subject);

        for address in to {
            let mailbox = address.parse::<Mailbox>().map_err(|error| {
                AppError::Delivery(format!("invalid recipient address '{address}': {error}"))
            })?;
            builder = builder.to(mailbox);
        }

        let message = match html_body {
            Some(html_body) => builder.multipart(MultiPart::alternative_plain_html(
                text_body.to_owned(),
                html_body.to_owned(),
            )),
            None => builder.singlepart(SinglePart::plain(text_body.to_owned())),
        };

        message.map_err(|error| AppError::Delivery(format!("failed to build email: {error}")))
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &[String],
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<()> {
        if to.is_empty() {
            return Err(AppError::Delivery(
                "at least one recipient address is required".to_owned(),
            ));
        }

        let message = self.build_message(to, subject, text_body, html_body)?;

        self.mailer
            .send(message)
            .await
            .map_err(|error| AppError::Delivery(format!("failed to send email: {error}")))?;

        debug!(recipients = to.len(), subject, "email handed to smtp relay");

        Ok(())
    }
}
