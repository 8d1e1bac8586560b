//! Email notifications for account and activity lifecycle events.
//!
//! Each notification kind renders a subject, an HTML body and a plain-text
//! alternative, then hands them to the [`EmailService`] port. Transport
//! failures surface as `AppError::Delivery`; callers decide whether to
//! propagate or swallow them.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;
use tracing::info;

use sedapal_core::{AppError, AppResult};
use sedapal_domain::UserRole;

mod account;
mod activity;
mod templates;

#[cfg(test)]
mod tests;

/// Subject of the transport check email.
pub const TEST_EMAIL_SUBJECT: &str = "Test - Sistema SEDAPAL";

/// Body of the transport check email.
pub const TEST_EMAIL_BODY: &str = "Este es un email de prueba del sistema SEDAPAL. Si recibes este mensaje, la configuración de correo funciona correctamente.";

/// Port for sending emails. Infrastructure provides SMTP or console implementations.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends one message to every address in `to`.
    ///
    /// When `html_body` is present the message is multipart with `text_body`
    /// as the plain-text alternative.
    async fn send_email(
        &self,
        to: &[String],
        subject: &str,
        text_body: &str,
        html_body: Option<&str>,
    ) -> AppResult<()>;
}

/// A fully rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient addresses, in order, duplicates kept.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub text_body: String,
    /// Optional HTML body.
    pub html_body: Option<String>,
}

/// Rendering settings shared by every template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// Base URL of the web front end; the login link is `{frontend_url}/login`.
    pub frontend_url: String,
    /// Optional logo shown in the HTML footer.
    pub logo_url: Option<String>,
}

impl NotificationSettings {
    fn login_url(&self) -> String {
        format!("{}/login", self.frontend_url.trim_end_matches('/'))
    }
}

/// Activity fields shared by the activity notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDetails {
    /// Activity title.
    pub activity_name: String,
    /// Short code of the system the activity belongs to.
    pub system_abbreviation: String,
    /// Responsible team.
    pub team_name: String,
    /// Quarter number.
    pub quarter: i32,
    /// Free-form due date, if any.
    pub due_date: Option<String>,
}

/// Credentials issued to a newly created account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsNotice {
    /// Recipient and login email.
    pub email: String,
    /// Given name as supplied by the caller.
    pub given_name: String,
    /// Family name as supplied by the caller.
    pub family_name: String,
    /// Password to disclose.
    pub password: String,
    /// Role granted.
    pub role: UserRole,
}

/// Credentials for a new user combined with their first activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsWithActivityNotice {
    /// Recipient and login email.
    pub email: String,
    /// Given name as supplied by the caller.
    pub given_name: String,
    /// Family name as supplied by the caller.
    pub family_name: String,
    /// Password to disclose.
    pub password: String,
    /// Activity assigned with the account.
    pub activity: ActivityDetails,
}

/// New activity assigned to an existing user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityAssignedNotice {
    /// Recipient.
    pub email: Option<String>,
    /// Greeting name.
    pub user_name: Option<String>,
    /// Activity title.
    pub activity_name: Option<String>,
    /// System short code.
    pub system_abbreviation: Option<String>,
    /// Responsible team.
    pub team_name: Option<String>,
    /// Quarter number.
    pub quarter: i32,
    /// Free-form due date.
    pub due_date: Option<String>,
}

/// A user marked a deliverable as complete and an administrator must review it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverableFlaggedNotice {
    /// Reviewing administrator.
    pub admin_email: Option<String>,
    /// User who completed the activity.
    pub user_name: Option<String>,
    /// Email of that user.
    pub user_email: Option<String>,
    /// Activity title.
    pub activity_name: Option<String>,
    /// Deliverable title.
    pub deliverable_name: Option<String>,
    /// System short code.
    pub system_abbreviation: Option<String>,
    /// Responsible team.
    pub team_name: Option<String>,
    /// Free-form due date.
    pub due_date: Option<String>,
}

/// An administrator approved a deliverable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverableApprovedNotice {
    /// Users involved in the activity.
    pub user_recipients: Vec<String>,
    /// Super administrators to keep informed.
    pub superadmin_recipients: Vec<String>,
    /// Activity title.
    pub activity_name: Option<String>,
    /// Deliverable title.
    pub deliverable_name: Option<String>,
    /// System short code.
    pub system_abbreviation: Option<String>,
    /// Responsible team.
    pub team_name: Option<String>,
    /// Free-form due date.
    pub due_date: Option<String>,
}

/// A user account created together with its organizational placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCreatedNotice {
    /// Recipient and login email.
    pub email: Option<String>,
    /// Greeting name.
    pub user_name: Option<String>,
    /// Password to disclose.
    pub password: Option<String>,
    /// Division ("gerencia") the user belongs to.
    pub division_name: Option<String>,
    /// Team the user belongs to.
    pub team_name: Option<String>,
}

/// A system was assigned to an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemAssignedNotice {
    /// Recipient.
    pub email: Option<String>,
    /// Greeting name.
    pub admin_name: Option<String>,
    /// System short code.
    pub system_abbreviation: Option<String>,
    /// System description.
    pub system_name: Option<String>,
}

/// Application service that formats and dispatches notifications.
#[derive(Clone)]
pub struct NotificationService {
    email_service: Arc<dyn EmailService>,
    settings: NotificationSettings,
}

impl NotificationService {
    /// Creates a new notification service.
    #[must_use]
    pub fn new(email_service: Arc<dyn EmailService>, settings: NotificationSettings) -> Self {
        Self {
            email_service,
            settings,
        }
    }

    /// Sends a plain-text message without an HTML part.
    pub async fn send_plain_text(
        &self,
        recipient: Option<&str>,
        subject: &str,
        body: &str,
    ) -> AppResult<()> {
        let to = recipients([recipient])?;
        self.dispatch(OutboundEmail {
            to,
            subject: subject.to_owned(),
            text_body: body.to_owned(),
            html_body: None,
        })
        .await
    }

    /// Sends the fixed transport check email.
    pub async fn send_test_email(&self, recipient: Option<&str>) -> AppResult<()> {
        self.send_plain_text(recipient, TEST_EMAIL_SUBJECT, TEST_EMAIL_BODY)
            .await
    }

    async fn dispatch(&self, email: OutboundEmail) -> AppResult<()> {
        self.email_service
            .send_email(
                &email.to,
                &email.subject,
                &email.text_body,
                email.html_body.as_deref(),
            )
            .await
            .map_err(|error| match error {
                AppError::Delivery(_) => error,
                other => AppError::Delivery(other.message().to_owned()),
            })?;

        info!(
            subject = %email.subject,
            recipients = email.to.len(),
            "notification sent"
        );

        Ok(())
    }

    fn compose(
        &self,
        to: Vec<String>,
        subject: String,
        heading: (templates::Accent, &str),
        html_content: &str,
        text_content: &str,
    ) -> OutboundEmail {
        let year = chrono::Utc::now().year();
        let (accent, title) = heading;

        OutboundEmail {
            to,
            subject,
            text_body: templates::text_document(text_content, year),
            html_body: Some(templates::html_document(
                &self.settings,
                accent,
                title,
                templates::SYSTEM_TAGLINE,
                html_content,
                year,
            )),
        }
    }
}

fn text_or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(fallback)
}

/// Collects non-blank addresses, trimmed, in order. Fails when none remain.
fn recipients<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> AppResult<Vec<String>> {
    let to: Vec<String> = values
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
        .collect();

    if to.is_empty() {
        return Err(AppError::Delivery(
            "at least one recipient address is required".to_owned(),
        ));
    }

    Ok(to)
}
