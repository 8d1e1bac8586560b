//! PostgreSQL-backed administrator assignment repository.

use async_trait::async_trait;
use sqlx::PgPool;

use sedapal_application::{
    AdminSystemAssignmentRecord, AdminSystemRepository, NewAdminSystemAssignment,
};
use sedapal_core::{AppError, AppResult};
use sedapal_domain::{AssignmentId, SystemId, UserId};

/// PostgreSQL implementation of the assignment repository port.
#[derive(Clone)]
pub struct PostgresAdminSystemRepository {
    pool: PgPool,
}

impl PostgresAdminSystemRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AdminSystemRow {
    id_admin_sistema: i64,
    id_admin: i64,
    id_sistema: i64,
    fecha_asignacion: chrono::DateTime<chrono::Utc>,
    estado: bool,
}

impl From<AdminSystemRow> for AdminSystemAssignmentRecord {
    fn from(row: AdminSystemRow) -> Self {
        Self {
            id: AssignmentId::new(row.id_admin_sistema),
            admin_id: UserId::new(row.id_admin),
            system_id: SystemId::new(row.id_sistema),
            assigned_at: row.fecha_asignacion,
            active: row.estado,
        }
    }
}

pub(crate) const INSERT_ASSIGNMENT_SQL: &str = r#"
    INSERT INTO tb_admin_sistemas (id_admin, id_sistema, estado)
    VALUES ($1, $2, $3)
    RETURNING id_admin_sistema, id_admin, id_sistema, fecha_asignacion, estado
"#;

/// Maps insert failures, turning a missing user or system into a validation error.
pub(crate) fn assignment_insert_error(error: sqlx::Error, system_id: SystemId) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23503")
    {
        return AppError::Validation(format!(
            "system '{system_id}' or its administrator does not exist"
        ));
    }

    AppError::Internal(format!("failed to save system assignment: {error}"))
}

#[async_trait]
impl AdminSystemRepository for PostgresAdminSystemRepository {
    async fn find_by_admin_and_active(
        &self,
        admin_id: UserId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
        let rows = sqlx::query_as::<_, AdminSystemRow>(
            r#"
            SELECT id_admin_sistema, id_admin, id_sistema, fecha_asignacion, estado
            FROM tb_admin_sistemas
            WHERE id_admin = $1 AND estado = $2
            ORDER BY id_admin_sistema
            "#,
        )
        .bind(admin_id.value())
        .bind(active)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list system assignments for administrator: {error}"
            ))
        })?;

        Ok(rows
            .into_iter()
            .map(AdminSystemAssignmentRecord::from)
            .collect())
    }

    async fn find_by_system_and_active(
        &self,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
        let rows = sqlx::query_as::<_, AdminSystemRow>(
            r#"
            SELECT id_admin_sistema, id_admin, id_sistema, fecha_asignacion, estado
            FROM tb_admin_sistemas
            WHERE id_sistema = $1 AND estado = $2
            ORDER BY id_admin_sistema
            "#,
        )
        .bind(system_id.value())
        .bind(active)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!(
                "failed to list system assignments for system: {error}"
            ))
        })?;

        Ok(rows
            .into_iter()
            .map(AdminSystemAssignmentRecord::from)
            .collect())
    }

    async fn find_by_admin_and_system_and_active(
        &self,
        admin_id: UserId,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<Option<AdminSystemAssignmentRecord>> {
        let row = sqlx::query_as::<_, AdminSystemRow>(
            r#"
            SELECT id_admin_sistema, id_admin, id_sistema, fecha_asignacion, estado
            FROM tb_admin_sistemas
            WHERE id_admin = $1 AND id_sistema = $2 AND estado = $3
            ORDER BY id_admin_sistema
            LIMIT 1
            "#,
        )
        .bind(admin_id.value())
        .bind(system_id.value())
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to find system assignment: {error}"))
        })?;

        Ok(row.map(AdminSystemAssignmentRecord::from))
    }

    async fn exists_by_admin_and_system_and_active(
        &self,
        admin_id: UserId,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM tb_admin_sistemas
                WHERE id_admin = $1 AND id_sistema = $2 AND estado = $3
            )
            "#,
        )
        .bind(admin_id.value())
        .bind(system_id.value())
        .bind(active)
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to check system assignment: {error}"))
        })
    }

    async fn save(
        &self,
        assignment: NewAdminSystemAssignment,
    ) -> AppResult<AdminSystemAssignmentRecord> {
        let row = sqlx::query_as::<_, AdminSystemRow>(INSERT_ASSIGNMENT_SQL)
            .bind(assignment.admin_id.value())
            .bind(assignment.system_id.value())
            .bind(assignment.active.unwrap_or(true))
            .fetch_one(&self.pool)
            .await
            .map_err(|error| assignment_insert_error(error, assignment.system_id))?;

        Ok(AdminSystemAssignmentRecord::from(row))
    }
}
