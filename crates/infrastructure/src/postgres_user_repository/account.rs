use crate::postgres_admin_system_repository::{
    AdminSystemRow, INSERT_ASSIGNMENT_SQL, assignment_insert_error,
};

use super::*;

const INSERT_USER_SQL: &str = r#"
    INSERT INTO tb_usuarios (nombre, apellido, email, contrasena, rol, estado)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id_usuario, nombre, apellido, email, contrasena, rol, fecha_creacion, estado
"#;

impl PostgresUserRepository {
    pub(super) async fn save_impl(&self, user: NewUser) -> AppResult<UserRecord> {
        let row = sqlx::query_as::<_, UserRow>(INSERT_USER_SQL)
            .bind(user.given_name)
            .bind(user.family_name)
            .bind(user.email)
            .bind(user.password)
            .bind(user.role.as_str())
            .bind(user.active.unwrap_or(true))
            .fetch_one(&self.pool)
            .await
            .map_err(|error| email_conflict_or_internal(error, "create user"))?;

        UserRecord::try_from(row)
    }

    pub(super) async fn save_with_system_assignment_impl(
        &self,
        user: NewUser,
        system_id: SystemId,
    ) -> AppResult<(UserRecord, AdminSystemAssignmentRecord)> {
        let mut transaction =
            self.pool.begin().await.map_err(|error| {
                AppError::Internal(format!("failed to begin transaction: {error}"))
            })?;

        let user_row = sqlx::query_as::<_, UserRow>(INSERT_USER_SQL)
            .bind(user.given_name)
            .bind(user.family_name)
            .bind(user.email)
            .bind(user.password)
            .bind(user.role.as_str())
            .bind(user.active.unwrap_or(true))
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| email_conflict_or_internal(error, "create administrator"))?;

        let assignment_row = sqlx::query_as::<_, AdminSystemRow>(INSERT_ASSIGNMENT_SQL)
            .bind(user_row.id_usuario)
            .bind(system_id.value())
            .bind(true)
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| assignment_insert_error(error, system_id))?;

        transaction.commit().await.map_err(|error| {
            AppError::Internal(format!("failed to commit transaction: {error}"))
        })?;

        Ok((
            UserRecord::try_from(user_row)?,
            AdminSystemAssignmentRecord::from(assignment_row),
        ))
    }
}
