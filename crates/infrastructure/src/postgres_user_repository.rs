//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use sedapal_application::{AdminSystemAssignmentRecord, NewUser, UserRecord, UserRepository};
use sedapal_core::{AppError, AppResult};
use sedapal_domain::{SystemId, UserId, UserRole};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id_usuario: i64,
    nombre: String,
    apellido: String,
    email: String,
    contrasena: String,
    rol: String,
    fecha_creacion: chrono::DateTime<chrono::Utc>,
    estado: bool,
}

impl TryFrom<UserRow> for UserRecord {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id_usuario),
            given_name: row.nombre,
            family_name: row.apellido,
            email: row.email,
            password: row.contrasena,
            role: UserRole::parse(row.rol.as_str())?,
            created_at: row.fecha_creacion,
            active: row.estado,
        })
    }
}

mod account;
mod lookup;

#[cfg(test)]
mod tests;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        self.find_by_email_impl(email).await
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        self.exists_by_email_impl(email).await
    }

    async fn find_by_role_and_active(
        &self,
        role: UserRole,
        active: bool,
    ) -> AppResult<Vec<UserRecord>> {
        self.find_by_role_and_active_impl(role, active).await
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
        active: bool,
    ) -> AppResult<Option<UserRecord>> {
        self.find_by_credentials_impl(email, password, active).await
    }

    async fn save(&self, user: NewUser) -> AppResult<UserRecord> {
        self.save_impl(user).await
    }

    async fn save_with_system_assignment(
        &self,
        user: NewUser,
        system_id: SystemId,
    ) -> AppResult<(UserRecord, AdminSystemAssignmentRecord)> {
        self.save_with_system_assignment_impl(user, system_id).await
    }
}

fn email_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict("an account with this email already exists".to_owned());
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
