//! Direct notification endpoints.
//!
//! Bodies are plain text. Delivery failures surface as 500 with the error
//! kind and message in the body.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use sedapal_application::{
    ActivityAssignedNotice, DeliverableApprovedNotice, DeliverableFlaggedNotice,
    SystemAssignedNotice, UserCreatedNotice,
};
use sedapal_core::{AppError, AppResult};
use tracing::{error, info};

use crate::dto::{
    ActivityAssignedRequest, DeliverableApprovedRequest, DeliverableFlaggedRequest,
    SystemAssignedRequest, TestEmailRequest, UserCreatedRequest,
};
use crate::state::AppState;

type TextResponse = (StatusCode, String);

pub async fn activity_assigned_handler(
    State(state): State<AppState>,
    Json(payload): Json<ActivityAssignedRequest>,
) -> TextResponse {
    info!(email = ?payload.email, "sending activity notification");

    let notice = ActivityAssignedNotice::from(payload);
    let outcome = state
        .notification_service
        .send_activity_assigned(&notice)
        .await;

    respond(
        outcome,
        "Notificación enviada exitosamente",
        "Error al enviar notificación: ",
    )
}

pub async fn deliverable_flagged_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeliverableFlaggedRequest>,
) -> TextResponse {
    info!(
        admin_email = ?payload.admin_email,
        user_email = ?payload.usuario_email,
        activity = ?payload.nombre_actividad,
        "sending deliverable review notification"
    );

    let admin_email_missing = payload
        .admin_email
        .as_deref()
        .is_none_or(|email| email.trim().is_empty());
    if admin_email_missing {
        return (StatusCode::BAD_REQUEST, "adminEmail requerido".to_owned());
    }

    let notice = DeliverableFlaggedNotice::from(payload);
    let outcome = state
        .notification_service
        .send_deliverable_flagged(&notice)
        .await;

    respond(outcome, "Notificación enviada al admin", "")
}

pub async fn deliverable_approved_handler(
    State(state): State<AppState>,
    Json(payload): Json<DeliverableApprovedRequest>,
) -> TextResponse {
    let notice = DeliverableApprovedNotice::from(payload);
    let outcome = state
        .notification_service
        .send_deliverable_approved(&notice)
        .await;

    respond(outcome, "Notificación de conforme enviada", "Error: ")
}

pub async fn user_created_handler(
    State(state): State<AppState>,
    Json(payload): Json<UserCreatedRequest>,
) -> TextResponse {
    let notice = UserCreatedNotice::from(payload);
    let outcome = state.notification_service.send_user_created(&notice).await;

    respond(outcome, "Notificación de usuario creado enviada", "Error: ")
}

pub async fn system_assigned_handler(
    State(state): State<AppState>,
    Json(payload): Json<SystemAssignedRequest>,
) -> TextResponse {
    let notice = SystemAssignedNotice::from(payload);
    let outcome = state
        .notification_service
        .send_system_assigned(&notice)
        .await;

    respond(
        outcome,
        "Notificación de asignación de sistema enviada",
        "Error: ",
    )
}

pub async fn test_email_handler(
    State(state): State<AppState>,
    Json(payload): Json<TestEmailRequest>,
) -> TextResponse {
    info!(email = ?payload.email, "sending test email");

    let recipient = payload.email.as_deref();
    let outcome = state.notification_service.send_test_email(recipient).await;
    let confirmation = format!(
        "Email de prueba enviado exitosamente a {}",
        recipient.unwrap_or_default()
    );

    respond(outcome, &confirmation, "Error al enviar email: ")
}

fn respond(outcome: AppResult<()>, confirmation: &str, failure_prefix: &str) -> TextResponse {
    match outcome {
        Ok(()) => (StatusCode::OK, confirmation.to_owned()),
        Err(failure) => {
            error!(error = %failure, "notification request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                failure_text(failure_prefix, &failure),
            )
        }
    }
}

fn failure_text(prefix: &str, failure: &AppError) -> String {
    format!("{prefix}{}: {}", failure.kind(), failure.message())
}
