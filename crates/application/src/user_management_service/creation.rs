use sedapal_domain::temporary_password;

use crate::{CredentialsNotice, CredentialsWithActivityNotice};

use super::*;

impl UserManagementService {
    /// Creates an administrator with the caller's password and assigns a system.
    ///
    /// The user row and the assignment row are written atomically. The
    /// returned record never discloses the password.
    pub async fn create_admin(&self, input: CreateAdminInput) -> AppResult<CreatedUser> {
        let email = self.ensure_email_available(&input.email).await?;
        let new_admin = new_user(
            &input.given_name,
            &input.family_name,
            &email,
            &input.password,
            UserRole::Admin,
        );

        let (admin, assignment) = self
            .user_repository
            .save_with_system_assignment(new_admin, input.system_id)
            .await
            .map_err(|error| conflict_as_duplicate(error, &email))?;

        info!(
            user_id = %admin.id,
            email = %admin.email,
            system_id = %assignment.system_id,
            "administrator created and assigned to system"
        );

        let notice = CredentialsNotice {
            email: admin.email.clone(),
            given_name: input.given_name,
            family_name: input.family_name,
            password: input.password,
            role: UserRole::Admin,
        };
        if let Err(notification_error) = self.notification_service.send_credentials(&notice).await
        {
            error!(
                email = %admin.email,
                error = %notification_error,
                "failed to send administrator credentials"
            );
        }

        Ok(CreatedUser {
            user: admin,
            generated_password: None,
        })
    }

    /// Creates a regular user with a generated password.
    pub async fn create_user(&self, input: CreateUserInput) -> AppResult<CreatedUser> {
        let (user, password) = self.insert_generated_user(&input).await?;

        let notice = CredentialsNotice {
            email: user.email.clone(),
            given_name: input.given_name,
            family_name: input.family_name,
            password: password.clone(),
            role: UserRole::User,
        };
        if let Err(notification_error) = self.notification_service.send_credentials(&notice).await
        {
            error!(
                email = %user.email,
                error = %notification_error,
                "failed to send user credentials"
            );
        }

        Ok(CreatedUser {
            user,
            generated_password: Some(password),
        })
    }

    /// Creates a regular user and announces their first activity in the welcome email.
    pub async fn create_user_with_activity(
        &self,
        input: CreateUserWithActivityInput,
    ) -> AppResult<CreatedUser> {
        let (user, password) = self.insert_generated_user(&input.user).await?;

        let notice = CredentialsWithActivityNotice {
            email: user.email.clone(),
            given_name: input.user.given_name,
            family_name: input.user.family_name,
            password: password.clone(),
            activity: input.activity,
        };
        if let Err(notification_error) = self
            .notification_service
            .send_credentials_with_activity(&notice)
            .await
        {
            error!(
                email = %user.email,
                error = %notification_error,
                "failed to send user credentials with activity"
            );
        }

        Ok(CreatedUser {
            user,
            generated_password: Some(password),
        })
    }

    async fn insert_generated_user(
        &self,
        input: &CreateUserInput,
    ) -> AppResult<(UserRecord, String)> {
        let email = self.ensure_email_available(&input.email).await?;

        let suffix = self.password_suffix_source.next_suffix()?;
        let password = temporary_password(&input.given_name, &input.family_name, suffix)?;

        let user = self
            .user_repository
            .save(new_user(
                &input.given_name,
                &input.family_name,
                &email,
                &password,
                UserRole::User,
            ))
            .await
            .map_err(|error| conflict_as_duplicate(error, &email))?;

        info!(user_id = %user.id, email = %user.email, "user created");

        Ok((user, password))
    }
}

/// A unique-index race surfaces with the same message as the upfront check.
fn conflict_as_duplicate(error: AppError, email: &EmailAddress) -> AppError {
    match error {
        AppError::Conflict(_) => duplicate_email(email.as_str()),
        other => other,
    }
}
