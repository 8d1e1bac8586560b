use axum::Router;
use axum::routing::{get, post};
use sedapal_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;

pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let usuario_routes = Router::new()
        .route(
            "/api/usuarios/admin",
            post(handlers::usuarios::create_admin_handler),
        )
        .route(
            "/api/usuarios/admin/all",
            get(handlers::usuarios::list_admins_handler),
        )
        .route(
            "/api/usuarios/usuario",
            post(handlers::usuarios::create_user_handler),
        )
        .route(
            "/api/usuarios/usuario-con-actividad",
            post(handlers::usuarios::create_user_with_activity_handler),
        )
        .route(
            "/api/usuarios/validar",
            post(handlers::usuarios::validate_credentials_handler),
        )
        .route("/api/usuarios/health", get(handlers::health::health_handler))
        .route(
            "/api/usuarios/{email}",
            get(handlers::usuarios::get_user_by_email_handler),
        );

    let notificacion_routes = Router::new()
        .route(
            "/api/notificaciones/actividad-asignada",
            post(handlers::notificaciones::activity_assigned_handler),
        )
        .route(
            "/api/notificaciones/usuario-cumplio",
            post(handlers::notificaciones::deliverable_flagged_handler),
        )
        .route(
            "/api/notificaciones/conforme",
            post(handlers::notificaciones::deliverable_approved_handler),
        )
        .route(
            "/api/notificaciones/usuario-creado",
            post(handlers::notificaciones::user_created_handler),
        )
        .route(
            "/api/notificaciones/asignacion-sistema",
            post(handlers::notificaciones::system_assigned_handler),
        )
        .route(
            "/api/notificaciones/test",
            post(handlers::notificaciones::test_email_handler),
        );

    Ok(Router::new()
        .merge(usuario_routes)
        .route(
            "/api/admin-sistemas/admin/{admin_id}",
            get(handlers::admin_sistemas::systems_for_admin_handler),
        )
        .merge(notificacion_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
