use sedapal_application::{
    ActivityAssignedNotice, DeliverableApprovedNotice, DeliverableFlaggedNotice,
    SystemAssignedNotice, UserCreatedNotice,
};
use serde::Deserialize;
use ts_rs::TS;

/// Incoming payload for an activity assignment notification.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/activity-assigned-request.ts"
)]
pub struct ActivityAssignedRequest {
    pub email: Option<String>,
    pub nombre_usuario: Option<String>,
    pub nombre_actividad: Option<String>,
    pub sistema_abrev: Option<String>,
    pub equipo_nombre: Option<String>,
    #[serde(default)]
    pub trimestre: i32,
    pub fecha_maxima: Option<String>,
}

/// Incoming payload telling an administrator that a deliverable awaits review.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/deliverable-flagged-request.ts"
)]
pub struct DeliverableFlaggedRequest {
    pub admin_email: Option<String>,
    pub usuario_nombre: Option<String>,
    pub usuario_email: Option<String>,
    pub nombre_actividad: Option<String>,
    pub entregable_nombre: Option<String>,
    pub sistema_abrev: Option<String>,
    pub equipo_nombre: Option<String>,
    pub fecha_maxima: Option<String>,
}

/// Incoming payload for a deliverable approval notification.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/deliverable-approved-request.ts"
)]
pub struct DeliverableApprovedRequest {
    pub usuarios_destino: Option<Vec<String>>,
    pub superadmins_destino: Option<Vec<String>>,
    pub nombre_actividad: Option<String>,
    pub entregable_nombre: Option<String>,
    pub sistema_abrev: Option<String>,
    pub equipo_nombre: Option<String>,
    pub fecha_maxima: Option<String>,
}

/// Incoming payload for a user-created notification with organisation details.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-created-request.ts"
)]
pub struct UserCreatedRequest {
    pub email: Option<String>,
    pub nombre_usuario: Option<String>,
    pub contrasena: Option<String>,
    pub gerencia_nombre: Option<String>,
    pub equipo_nombre: Option<String>,
}

/// Incoming payload for a system assignment notification.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/system-assigned-request.ts"
)]
pub struct SystemAssignedRequest {
    pub email: Option<String>,
    pub nombre_admin: Option<String>,
    pub sistema_abrev: Option<String>,
    pub sistema_nombre: Option<String>,
}

/// Incoming payload for the transport check email.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/test-email-request.ts"
)]
pub struct TestEmailRequest {
    pub email: Option<String>,
}

impl From<ActivityAssignedRequest> for ActivityAssignedNotice {
    fn from(value: ActivityAssignedRequest) -> Self {
        Self {
            email: value.email,
            user_name: value.nombre_usuario,
            activity_name: value.nombre_actividad,
            system_abbreviation: value.sistema_abrev,
            team_name: value.equipo_nombre,
            quarter: value.trimestre,
            due_date: value.fecha_maxima,
        }
    }
}

impl From<DeliverableFlaggedRequest> for DeliverableFlaggedNotice {
    fn from(value: DeliverableFlaggedRequest) -> Self {
        Self {
            admin_email: value.admin_email.map(|email| email.trim().to_owned()),
            user_name: value.usuario_nombre,
            user_email: value.usuario_email,
            activity_name: value.nombre_actividad,
            deliverable_name: value.entregable_nombre,
            system_abbreviation: value.sistema_abrev,
            team_name: value.equipo_nombre,
            due_date: value.fecha_maxima,
        }
    }
}

impl From<DeliverableApprovedRequest> for DeliverableApprovedNotice {
    fn from(value: DeliverableApprovedRequest) -> Self {
        Self {
            user_recipients: value.usuarios_destino.unwrap_or_default(),
            superadmin_recipients: value.superadmins_destino.unwrap_or_default(),
            activity_name: value.nombre_actividad,
            deliverable_name: value.entregable_nombre,
            system_abbreviation: value.sistema_abrev,
            team_name: value.equipo_nombre,
            due_date: value.fecha_maxima,
        }
    }
}

impl From<UserCreatedRequest> for UserCreatedNotice {
    fn from(value: UserCreatedRequest) -> Self {
        Self {
            email: value.email,
            user_name: value.nombre_usuario,
            password: value.contrasena,
            division_name: value.gerencia_nombre,
            team_name: value.equipo_nombre,
        }
    }
}

impl From<SystemAssignedRequest> for SystemAssignedNotice {
    fn from(value: SystemAssignedRequest) -> Self {
        Self {
            email: value.email,
            admin_name: value.nombre_admin,
            system_abbreviation: value.sistema_abrev,
            system_name: value.sistema_nombre,
        }
    }
}
