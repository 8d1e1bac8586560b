//! User and administrator account management.
//!
//! Creation operations validate the email, reject duplicates, normalize names
//! and persist through the repository in a single unit of work. The
//! credentials email is sent only after the write succeeds, and a failed send
//! is logged without affecting the result.

use std::sync::Arc;

use tracing::{error, info, warn};

use sedapal_core::{AppError, AppResult};
use sedapal_domain::{EmailAddress, SystemId, UserRole, normalize_person_name};

use crate::{
    ActivityDetails, NewUser, NotificationService, PasswordSuffixSource, UserRecord,
    UserRepository,
};

mod creation;
mod credentials;
mod retrieval;


/// Input for administrator creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAdminInput {
    /// Given name as supplied.
    pub given_name: String,
    /// Family name as supplied.
    pub family_name: String,
    /// Login email.
    pub email: String,
    /// Password chosen by the caller, stored verbatim.
    pub password: String,
    /// System the administrator is responsible for.
    pub system_id: SystemId,
}

/// Input for regular user creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    /// Given name as supplied.
    pub given_name: String,
    /// Family name as supplied.
    pub family_name: String,
    /// Login email.
    pub email: String,
}

/// Input for user creation with a first activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserWithActivityInput {
    /// Account fields.
    pub user: CreateUserInput,
    /// Activity announced in the welcome email.
    pub activity: ActivityDetails,
}

/// Outcome of a creation operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUser {
    /// Stored user.
    pub user: UserRecord,
    /// Password generated by the service, disclosed once to the caller.
    pub generated_password: Option<String>,
}

/// Application service for account lifecycle operations.
#[derive(Clone)]
pub struct UserManagementService {
    user_repository: Arc<dyn UserRepository>,
    notification_service: NotificationService,
    password_suffix_source: Arc<dyn PasswordSuffixSource>,
}

impl UserManagementService {
    /// Creates a new user management service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        notification_service: NotificationService,
        password_suffix_source: Arc<dyn PasswordSuffixSource>,
    ) -> Self {
        Self {
            user_repository,
            notification_service,
            password_suffix_source,
        }
    }

    /// Validates the email and fails with a conflict when it is taken.
    async fn ensure_email_available(&self, email: &str) -> AppResult<EmailAddress> {
        let email = EmailAddress::new(email)?;

        if self.user_repository.exists_by_email(email.as_str()).await? {
            return Err(duplicate_email(email.as_str()));
        }

        Ok(email)
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::Conflict(format!("Ya existe un usuario con el email: {email}"))
}

fn new_user(
    given_name: &str,
    family_name: &str,
    email: &EmailAddress,
    password: &str,
    role: UserRole,
) -> NewUser {
    NewUser {
        given_name: normalize_person_name(Some(given_name)).unwrap_or_default(),
        family_name: normalize_person_name(Some(family_name)).unwrap_or_default(),
        email: email.as_str().to_owned(),
        password: password.to_owned(),
        role,
        active: Some(true),
    }
}
