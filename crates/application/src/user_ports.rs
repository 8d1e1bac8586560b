//! User persistence port.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sedapal_core::AppResult;
use sedapal_domain::{SystemId, UserId, UserRole};

use crate::AdminSystemAssignmentRecord;

/// User record returned by repository queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Storage-assigned identifier.
    pub id: UserId,
    /// Given name as stored.
    pub given_name: String,
    /// Family name as stored.
    pub family_name: String,
    /// Unique email address.
    pub email: String,
    /// Stored password. Kept in plain text to preserve the existing login contract.
    pub password: String,
    /// Account role.
    pub role: UserRole,
    /// Set once when the row is inserted.
    pub created_at: DateTime<Utc>,
    /// Whether the account is active.
    pub active: bool,
}

/// Values for a user insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Normalized given name.
    pub given_name: String,
    /// Normalized family name.
    pub family_name: String,
    /// Canonical email address.
    pub email: String,
    /// Password to store.
    pub password: String,
    /// Account role.
    pub role: UserRole,
    /// Active flag; storage defaults it to `true` when absent.
    pub active: Option<bool>,
}

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact email regardless of status.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>>;

    /// Returns whether any user, active or not, owns the email.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// Lists users with the given role and status in insertion order.
    async fn find_by_role_and_active(
        &self,
        role: UserRole,
        active: bool,
    ) -> AppResult<Vec<UserRecord>>;

    /// Finds the user whose email, password and status all match exactly.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
        active: bool,
    ) -> AppResult<Option<UserRecord>>;

    /// Inserts a user and returns the stored record.
    ///
    /// A duplicate email yields `AppError::Conflict`.
    async fn save(&self, user: NewUser) -> AppResult<UserRecord>;

    /// Inserts a user and an active assignment to `system_id` atomically.
    ///
    /// Either both rows are stored or neither is.
    async fn save_with_system_assignment(
        &self,
        user: NewUser,
        system_id: SystemId,
    ) -> AppResult<(UserRecord, AdminSystemAssignmentRecord)>;
}
