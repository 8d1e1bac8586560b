use chrono::Utc;
use sedapal_application::{AdminSystemRepository, NewUser, SystemRepository, UserRepository};
use sedapal_core::AppError;
use sedapal_domain::{SystemId, UserRole};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use super::PostgresUserRepository;
use crate::{PostgresAdminSystemRepository, PostgresSystemRepository};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres user tests: {error}");
    }

    Some(pool)
}

fn unique_email(prefix: &str) -> String {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    format!("{prefix}.{nanos}@sedapal.com")
}

fn new_user(email: &str, role: UserRole) -> NewUser {
    NewUser {
        given_name: "Ana".to_owned(),
        family_name: "Lopez".to_owned(),
        email: email.to_owned(),
        password: "UserAL42".to_owned(),
        role,
        active: None,
    }
}

async fn insert_system(pool: &PgPool, description: &str) -> SystemId {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
            INSERT INTO tb_sistemas (desc_sistema, abrev, administrador, suplente, estado)
            VALUES ($1, 'TST', 'Responsable', NULL, 1)
            RETURNING id
            "#,
    )
    .bind(description)
    .fetch_one(pool)
    .await;

    match id {
        Ok(id) => SystemId::new(id),
        Err(error) => panic!("failed to insert test system: {error}"),
    }
}

#[tokio::test]
async fn save_and_lookup_user() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let email = unique_email("lookup");

    let saved = repository.save(new_user(&email, UserRole::User)).await;
    assert!(saved.is_ok());
    let saved = saved.unwrap_or_else(|_| unreachable!());
    assert!(saved.active);
    assert_eq!(saved.role, UserRole::User);

    let found = repository.find_by_email(&email).await.unwrap_or_default();
    assert_eq!(found.map(|user| user.id), Some(saved.id));
    assert!(repository.exists_by_email(&email).await.unwrap_or_default());

    let by_credentials = repository
        .find_by_credentials(&email, "UserAL42", true)
        .await
        .unwrap_or_default();
    assert!(by_credentials.is_some());

    let wrong_case = repository
        .find_by_credentials(&email, "useral42", true)
        .await
        .unwrap_or_default();
    assert!(wrong_case.is_none());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let email = unique_email("duplicate");

    assert!(repository.save(new_user(&email, UserRole::User)).await.is_ok());
    let duplicate = repository.save(new_user(&email, UserRole::Admin)).await;

    assert!(matches!(duplicate, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn inactive_users_do_not_match_credentials() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let email = unique_email("inactive");
    let mut user = new_user(&email, UserRole::User);
    user.active = Some(false);

    assert!(repository.save(user).await.is_ok());

    let found = repository
        .find_by_credentials(&email, "UserAL42", true)
        .await
        .unwrap_or_default();
    assert!(found.is_none());
}

#[tokio::test]
async fn save_with_system_assignment_stores_both_rows() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool.clone());
    let assignments = PostgresAdminSystemRepository::new(pool.clone());
    let systems = PostgresSystemRepository::new(pool.clone());
    let system_id = insert_system(&pool, "Sistema de pruebas").await;
    let email = unique_email("admin");

    let saved = repository
        .save_with_system_assignment(new_user(&email, UserRole::Admin), system_id)
        .await;
    assert!(saved.is_ok());
    let (user, assignment) = saved.unwrap_or_else(|_| unreachable!());
    assert_eq!(assignment.admin_id, user.id);
    assert_eq!(assignment.system_id, system_id);

    let linked = assignments
        .find_by_admin_and_active(user.id, true)
        .await
        .unwrap_or_default();
    assert_eq!(linked.len(), 1);

    let loaded = systems
        .find_all_by_ids(&[system_id])
        .await
        .unwrap_or_default();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].abbreviation.as_deref(), Some("TST"));

    let admins = repository
        .find_by_role_and_active(UserRole::Admin, true)
        .await
        .unwrap_or_default();
    assert!(admins.iter().any(|admin| admin.id == user.id));
}

#[tokio::test]
async fn save_with_unknown_system_rolls_back_user() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresUserRepository::new(pool);
    let email = unique_email("rollback");

    let result = repository
        .save_with_system_assignment(new_user(&email, UserRole::Admin), SystemId::new(-1))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(!repository.exists_by_email(&email).await.unwrap_or(true));
}
