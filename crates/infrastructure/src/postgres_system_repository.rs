use async_trait::async_trait;
use sqlx::PgPool;

use sedapal_application::{SystemRecord, SystemRepository};
use sedapal_core::{AppError, AppResult};
use sedapal_domain::SystemId;

/// PostgreSQL-backed read access to `tb_sistemas`.
#[derive(Clone)]
pub struct PostgresSystemRepository {
    pool: PgPool,
}

impl PostgresSystemRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SystemRow {
    id: i64,
    desc_sistema: String,
    abrev: Option<String>,
    administrador: Option<String>,
    suplente: Option<String>,
    estado: i32,
}

impl From<SystemRow> for SystemRecord {
    fn from(row: SystemRow) -> Self {
        Self {
            id: SystemId::new(row.id),
            description: row.desc_sistema,
            abbreviation: row.abrev,
            administrator: row.administrador,
            deputy: row.suplente,
            status: row.estado,
        }
    }
}

#[async_trait]
impl SystemRepository for PostgresSystemRepository {
    async fn find_all_by_ids(&self, ids: &[SystemId]) -> AppResult<Vec<SystemRecord>> {
        let ids: Vec<i64> = ids.iter().map(SystemId::value).collect();

        let rows = sqlx::query_as::<_, SystemRow>(
            r#"
            SELECT id, desc_sistema, abrev, administrador, suplente, estado
            FROM tb_sistemas
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load systems by id: {error}")))?;

        Ok(rows.into_iter().map(SystemRecord::from).collect())
    }

    async fn find_by_status(&self, status: i32) -> AppResult<Vec<SystemRecord>> {
        let rows = sqlx::query_as::<_, SystemRow>(
            r#"
            SELECT id, desc_sistema, abrev, administrador, suplente, estado
            FROM tb_sistemas
            WHERE estado = $1
            ORDER BY id
            "#,
        )
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to list systems by status: {error}"))
        })?;

        Ok(rows.into_iter().map(SystemRecord::from).collect())
    }
}
