use sedapal_application::{NotificationService, SystemAssignmentService, UserManagementService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_management_service: UserManagementService,
    pub system_assignment_service: SystemAssignmentService,
    pub notification_service: NotificationService,
}
