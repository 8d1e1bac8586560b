//! Console email service for development. Logs emails to tracing output.

use async_trait::async_trait;
use sedapal_application::EmailService;
use sedapal_core::AppResult;
use tracing::info;

/// Development email service that logs emails to the console.
#[derive(Clone)]
pub struct ConsoleEmailService;

impl ConsoleEmailService {
    /// Creates a new console email service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for ConsoleEmailService {
    async fn send_email(
        &self,
        to: &[String],
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<()> {
        let recipients = to.join(", ");

        info!(
            to = %recipients,
            subject = subject,
            has_html = html_body.is_some(),
            "--- EMAIL (console) ---\nTo: {}\nSubject: {}\n\n{}\n--- END EMAIL ---",
            recipients,
            subject,
            text_body
        );

        Ok(())
    }
}
