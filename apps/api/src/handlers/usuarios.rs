use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use sedapal_core::AppError;
use tracing::{error, info};

use crate::dto::{
    CreateAdminRequest, CreateUserRequest, CreateUserWithActivityRequest, UserResponse,
    ValidateCredentialsRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn create_admin_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    info!(email = %payload.email, system_id = payload.id_sistema, "creating administrator");

    let input = payload.into_input().map_err(ApiError::bad_request)?;
    let created = state
        .user_management_service
        .create_admin(input)
        .await
        .map_err(|failure| creation_failed("administrator", failure))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    info!(email = %payload.email, "creating user");

    let input = payload.into_input().map_err(ApiError::bad_request)?;
    let created = state
        .user_management_service
        .create_user(input)
        .await
        .map_err(|failure| creation_failed("user", failure))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn create_user_with_activity_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserWithActivityRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    info!(email = %payload.email, "creating user with activity");

    let input = payload.into_input().map_err(ApiError::bad_request)?;
    let created = state
        .user_management_service
        .create_user_with_activity(input)
        .await
        .map_err(|failure| creation_failed("user with activity", failure))?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn validate_credentials_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateCredentialsRequest>,
) -> ApiResult<Json<UserResponse>> {
    payload.validate().map_err(ApiError::bad_request)?;

    let user = state
        .user_management_service
        .validate_credentials(&payload.email, &payload.contrasena)
        .await
        .map_err(|failure| match failure {
            AppError::Unauthorized(_) => {
                ApiError::masked(StatusCode::UNAUTHORIZED, "Credenciales inválidas")
            }
            other => ApiError::from(other),
        })?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn get_user_by_email_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_management_service
        .get_by_email(&email)
        .await
        .map_err(|failure| match failure {
            AppError::NotFound(_) => ApiError::masked(StatusCode::NOT_FOUND, "Usuario no encontrado"),
            other => ApiError::from(other),
        })?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn list_admins_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let admins = state
        .user_management_service
        .list_active_admins()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(admins))
}

fn creation_failed(subject: &str, failure: AppError) -> ApiError {
    error!(error = %failure, "failed to create {subject}");
    ApiError::bad_request(failure)
}
