use std::sync::Arc;

use sedapal_application::{
    NotificationService, NotificationSettings, OsRandomPasswordSuffix, SystemAssignmentService,
    UserManagementService,
};
use sedapal_core::AppError;
use sedapal_infrastructure::{
    PostgresAdminSystemRepository, PostgresSystemRepository, PostgresUserRepository,
};
use sqlx::PgPool;

use crate::api_config::ApiConfig;
use crate::state::AppState;

use super::email::build_email_service;

pub fn build_app_state(pool: PgPool, config: &ApiConfig) -> Result<AppState, AppError> {
    let email_service = build_email_service(config)?;
    let notification_service = NotificationService::new(
        email_service,
        NotificationSettings {
            frontend_url: config.frontend_url.clone(),
            logo_url: config.email_logo_url.clone(),
        },
    );

    let user_repository = Arc::new(PostgresUserRepository::new(pool.clone()));
    let system_repository = Arc::new(PostgresSystemRepository::new(pool.clone()));
    let admin_system_repository = Arc::new(PostgresAdminSystemRepository::new(pool));

    Ok(AppState {
        user_management_service: UserManagementService::new(
            user_repository,
            notification_service.clone(),
            Arc::new(OsRandomPasswordSuffix::new()),
        ),
        system_assignment_service: SystemAssignmentService::new(
            admin_system_repository,
            system_repository,
        ),
        notification_service,
    })
}
