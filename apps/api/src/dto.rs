mod common;
mod notificaciones;
mod sistemas;
mod usuarios;

pub use common::HealthResponse;
pub use notificaciones::{
    ActivityAssignedRequest, DeliverableApprovedRequest, DeliverableFlaggedRequest,
    SystemAssignedRequest, TestEmailRequest, UserCreatedRequest,
};
pub use sistemas::SystemResponse;
pub use usuarios::{
    CreateAdminRequest, CreateUserRequest, CreateUserWithActivityRequest, UserResponse,
    ValidateCredentialsRequest,
};

#[cfg(test)]
mod tests {
    use super::{
        ActivityAssignedRequest, CreateAdminRequest, CreateUserRequest,
        CreateUserWithActivityRequest, DeliverableApprovedRequest, DeliverableFlaggedRequest,
        HealthResponse, SystemAssignedRequest, SystemResponse, TestEmailRequest,
        UserCreatedRequest, UserResponse, ValidateCredentialsRequest,
    };

    use crate::error::ErrorResponse;
    use ts_rs::Config;
    use ts_rs::TS;

    #[test]
    fn export_ts_bindings() -> Result<(), ts_rs::ExportError> {
        let config = Config::default();

        CreateAdminRequest::export(&config)?;
        CreateUserRequest::export(&config)?;
        CreateUserWithActivityRequest::export(&config)?;
        ValidateCredentialsRequest::export(&config)?;
        UserResponse::export(&config)?;
        SystemResponse::export(&config)?;
        ActivityAssignedRequest::export(&config)?;
        DeliverableFlaggedRequest::export(&config)?;
        DeliverableApprovedRequest::export(&config)?;
        UserCreatedRequest::export(&config)?;
        SystemAssignedRequest::export(&config)?;
        TestEmailRequest::export(&config)?;
        HealthResponse::export(&config)?;
        ErrorResponse::export(&config)?;

        let generated = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../packages/api-types/src/generated");
        for file in ["user-response.ts", "error-response.ts", "health-response.ts"] {
            assert!(generated.join(file).is_file(), "missing binding {file}");
        }

        Ok(())
    }
}
