use super::*;

impl UserManagementService {
    /// Finds a user by email regardless of status.
    pub async fn get_by_email(&self, email: &str) -> AppResult<UserRecord> {
        self.user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_owned()))
    }

    /// Lists active administrators in insertion order.
    pub async fn list_active_admins(&self) -> AppResult<Vec<UserRecord>> {
        self.user_repository
            .find_by_role_and_active(UserRole::Admin, true)
            .await
    }
}
