//! System and assignment persistence ports.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use sedapal_core::AppResult;
use sedapal_domain::{AssignmentId, SystemId, UserId};

/// Administrable system as stored. Maintained outside this service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemRecord {
    /// System identifier.
    pub id: SystemId,
    /// Human-readable description.
    pub description: String,
    /// Short code, e.g. `SIGA`.
    pub abbreviation: Option<String>,
    /// Free-text name of the responsible administrator.
    pub administrator: Option<String>,
    /// Free-text name of the deputy.
    pub deputy: Option<String>,
    /// Numeric status code.
    pub status: i32,
}

/// Link between an administrator and a system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSystemAssignmentRecord {
    /// Assignment identifier.
    pub id: AssignmentId,
    /// Administrator user.
    pub admin_id: UserId,
    /// Assigned system.
    pub system_id: SystemId,
    /// Set once when the row is inserted.
    pub assigned_at: DateTime<Utc>,
    /// Whether the assignment is current.
    pub active: bool,
}

/// Values for an assignment insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAdminSystemAssignment {
    /// Administrator user.
    pub admin_id: UserId,
    /// Assigned system.
    pub system_id: SystemId,
    /// Active flag; storage defaults it to `true` when absent.
    pub active: Option<bool>,
}

/// Read-only repository port for systems.
#[async_trait]
pub trait SystemRepository: Send + Sync {
    /// Returns the systems matching any of `ids`, each at most once.
    ///
    /// Unknown identifiers are skipped.
    async fn find_all_by_ids(&self, ids: &[SystemId]) -> AppResult<Vec<SystemRecord>>;

    /// Lists systems with the given status code.
    async fn find_by_status(&self, status: i32) -> AppResult<Vec<SystemRecord>>;
}

/// Repository port for administrator assignments.
#[async_trait]
pub trait AdminSystemRepository: Send + Sync {
    /// Lists assignments for an administrator with the given status, in storage order.
    async fn find_by_admin_and_active(
        &self,
        admin_id: UserId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>>;

    /// Lists assignments for a system with the given status, in storage order.
    async fn find_by_system_and_active(
        &self,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>>;

    /// Finds one assignment for the pair with the given status.
    async fn find_by_admin_and_system_and_active(
        &self,
        admin_id: UserId,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<Option<AdminSystemAssignmentRecord>>;

    /// Returns whether the pair has an assignment with the given status.
    async fn exists_by_admin_and_system_and_active(
        &self,
        admin_id: UserId,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<bool>;

    /// Inserts an assignment and returns the stored record.
    async fn save(
        &self,
        assignment: NewAdminSystemAssignment,
    ) -> AppResult<AdminSystemAssignmentRecord>;
}
