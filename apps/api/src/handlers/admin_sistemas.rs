use axum::Json;
use axum::extract::{Path, State};
use sedapal_domain::UserId;
use tracing::info;

use crate::dto::SystemResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn systems_for_admin_handler(
    State(state): State<AppState>,
    Path(admin_id): Path<i64>,
) -> ApiResult<Json<Vec<SystemResponse>>> {
    info!(admin_id, "listing systems for administrator");

    let systems = state
        .system_assignment_service
        .systems_for_admin(UserId::new(admin_id))
        .await?
        .into_iter()
        .map(SystemResponse::from)
        .collect();

    Ok(Json(systems))
}
