use super::*;

impl PostgresUserRepository {
    pub(super) async fn find_by_email_impl(&self, email: &str) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id_usuario, nombre, apellido, email, contrasena, rol, fecha_creacion, estado
            FROM tb_usuarios
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by email: {error}")))?;

        row.map(UserRecord::try_from).transpose()
    }

    pub(super) async fn exists_by_email_impl(&self, email: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM tb_usuarios WHERE email = $1)
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to check user email: {error}")))
    }

    pub(super) async fn find_by_role_and_active_impl(
        &self,
        role: UserRole,
        active: bool,
    ) -> AppResult<Vec<UserRecord>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id_usuario, nombre, apellido, email, contrasena, rol, fecha_creacion, estado
            FROM tb_usuarios
            WHERE rol = $1 AND estado = $2
            ORDER BY id_usuario
            "#,
        )
        .bind(role.as_str())
        .bind(active)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list users by role: {error}")))?;

        rows.into_iter().map(UserRecord::try_from).collect()
    }

    pub(super) async fn find_by_credentials_impl(
        &self,
        email: &str,
        password: &str,
        active: bool,
    ) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id_usuario, nombre, apellido, email, contrasena, rol, fecha_creacion, estado
            FROM tb_usuarios
            WHERE email = $1 AND contrasena = $2 AND estado = $3
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find user by credentials: {error}"))
        })?;

        row.map(UserRecord::try_from).transpose()
    }
}
