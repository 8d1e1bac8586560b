use super::*;

impl UserManagementService {
    /// Returns the active user whose email and password match exactly.
    pub async fn validate_credentials(&self, email: &str, password: &str) -> AppResult<UserRecord> {
        let user = self
            .user_repository
            .find_by_credentials(email, password, true)
            .await?;

        match user {
            Some(user) => {
                info!(user_id = %user.id, role = %user.role, "credentials validated");
                Ok(user)
            }
            None => {
                warn!(email = %email, "credential validation rejected");
                Err(AppError::Unauthorized("Credenciales inválidas".to_owned()))
            }
        }
    }
}
