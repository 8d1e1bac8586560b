use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod conversions;

/// Incoming payload for administrator creation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-admin-request.ts"
)]
pub struct CreateAdminRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub contrasena: String,
    #[ts(type = "number")]
    pub id_sistema: i64,
}

/// Incoming payload for regular user creation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-request.ts"
)]
pub struct CreateUserRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
}

/// Incoming payload for user creation with a first activity.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-user-with-activity-request.ts"
)]
pub struct CreateUserWithActivityRequest {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub nombre_actividad: String,
    pub sistema_abrev: String,
    pub equipo_nombre: String,
    pub trimestre: i32,
    #[ts(optional)]
    pub fecha_maxima: Option<String>,
}

/// Incoming payload for credential validation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/validate-credentials-request.ts"
)]
pub struct ValidateCredentialsRequest {
    pub email: String,
    pub contrasena: String,
}

/// API representation of a user.
///
/// `contrasena` is only present right after a password was generated.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    #[ts(type = "number")]
    pub id: i64,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub rol: String,
    pub contrasena: Option<String>,
    pub estado: bool,
}
