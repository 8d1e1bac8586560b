//! Application services and ports.

#![forbid(unsafe_code)]

mod notification_service;
mod password_suffix;
mod system_assignment_service;
mod system_ports;
mod user_management_service;
mod user_ports;

pub use notification_service::{
    ActivityAssignedNotice, ActivityDetails, CredentialsNotice, CredentialsWithActivityNotice,
    DeliverableApprovedNotice, DeliverableFlaggedNotice, EmailService, NotificationService,
    NotificationSettings, OutboundEmail, SystemAssignedNotice, TEST_EMAIL_BODY,
    TEST_EMAIL_SUBJECT, UserCreatedNotice,
};
pub use password_suffix::{OsRandomPasswordSuffix, PasswordSuffixSource};
pub use system_assignment_service::SystemAssignmentService;
pub use system_ports::{
    AdminSystemAssignmentRecord, AdminSystemRepository, NewAdminSystemAssignment, SystemRecord,
    SystemRepository,
};
pub use user_management_service::{
    CreateAdminInput, CreateUserInput, CreateUserWithActivityInput, CreatedUser,
    UserManagementService,
};
pub use user_ports::{NewUser, UserRecord, UserRepository};
