//! Queries over administrator-to-system assignments.

use std::sync::Arc;

use sedapal_core::AppResult;
use sedapal_domain::{SystemId, UserId};

use crate::{AdminSystemRepository, SystemRecord, SystemRepository};

/// Application service resolving which systems an administrator manages.
#[derive(Clone)]
pub struct SystemAssignmentService {
    assignment_repository: Arc<dyn AdminSystemRepository>,
    system_repository: Arc<dyn SystemRepository>,
}

impl SystemAssignmentService {
    /// Creates a new system assignment service.
    #[must_use]
    pub fn new(
        assignment_repository: Arc<dyn AdminSystemRepository>,
        system_repository: Arc<dyn SystemRepository>,
    ) -> Self {
        Self {
            assignment_repository,
            system_repository,
        }
    }

    /// Returns the systems currently assigned to `admin_id`.
    ///
    /// An administrator without active assignments yields an empty list and
    /// the system table is not queried.
    pub async fn systems_for_admin(&self, admin_id: UserId) -> AppResult<Vec<SystemRecord>> {
        let system_ids: Vec<SystemId> = self
            .assignment_repository
            .find_by_admin_and_active(admin_id, true)
            .await?
            .into_iter()
            .map(|assignment| assignment.system_id)
            .collect();

        if system_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.system_repository.find_all_by_ids(&system_ids).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use sedapal_core::{AppError, AppResult};
    use sedapal_domain::{AssignmentId, SystemId, UserId};

    use crate::{
        AdminSystemAssignmentRecord, AdminSystemRepository, NewAdminSystemAssignment,
        SystemRecord, SystemRepository,
    };

    use super::*;

    struct FakeAssignments(Vec<AdminSystemAssignmentRecord>);

    #[async_trait]
    impl AdminSystemRepository for FakeAssignments {
        async fn find_by_admin_and_active(
            &self,
            admin_id: UserId,
            active: bool,
        ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
            Ok(self
                .0
                .iter()
                .filter(|row| row.admin_id == admin_id && row.active == active)
                .cloned()
                .collect())
        }

        async fn find_by_system_and_active(
            &self,
            system_id: SystemId,
            active: bool,
        ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
            Ok(self
                .0
                .iter()
                .filter(|row| row.system_id == system_id && row.active == active)
                .cloned()
                .collect())
        }

        async fn find_by_admin_and_system_and_active(
            &self,
            admin_id: UserId,
            system_id: SystemId,
            active: bool,
        ) -> AppResult<Option<AdminSystemAssignmentRecord>> {
            Ok(self
                .0
                .iter()
                .find(|row| {
                    row.admin_id == admin_id && row.system_id == system_id && row.active == active
                })
                .cloned())
        }

        async fn exists_by_admin_and_system_and_active(
            &self,
            admin_id: UserId,
            system_id: SystemId,
            active: bool,
        ) -> AppResult<bool> {
            Ok(self
                .find_by_admin_and_system_and_active(admin_id, system_id, active)
                .await?
                .is_some())
        }

        async fn save(
            &self,
            _assignment: NewAdminSystemAssignment,
        ) -> AppResult<AdminSystemAssignmentRecord> {
            Err(AppError::Internal("read-only fake".to_owned()))
        }
    }

    #[derive(Default)]
    struct FakeSystems {
        systems: Vec<SystemRecord>,
        lookups: Mutex<Vec<Vec<SystemId>>>,
    }

    impl FakeSystems {
        fn lookups(&self) -> Vec<Vec<SystemId>> {
            self.lookups
                .lock()
                .map(|guard| guard.clone())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl SystemRepository for FakeSystems {
        async fn find_all_by_ids(&self, ids: &[SystemId]) -> AppResult<Vec<SystemRecord>> {
            self.lookups
                .lock()
                .map_err(|error| AppError::Internal(format!("lock poisoned: {error}")))?
                .push(ids.to_vec());
            Ok(self
                .systems
                .iter()
                .filter(|system| ids.contains(&system.id))
                .cloned()
                .collect())
        }

        async fn find_by_status(&self, status: i32) -> AppResult<Vec<SystemRecord>> {
            Ok(self
                .systems
                .iter()
                .filter(|system| system.status == status)
                .cloned()
                .collect())
        }
    }

    fn system(id: i64, abbreviation: &str) -> SystemRecord {
        SystemRecord {
            id: SystemId::new(id),
            description: format!("Sistema {abbreviation}"),
            abbreviation: Some(abbreviation.to_owned()),
            administrator: None,
            deputy: None,
            status: 1,
        }
    }

    fn assignment(id: i64, admin: i64, system: i64, active: bool) -> AdminSystemAssignmentRecord {
        AdminSystemAssignmentRecord {
            id: AssignmentId::new(id),
            admin_id: UserId::new(admin),
            system_id: SystemId::new(system),
            assigned_at: chrono::Utc::now(),
            active,
        }
    }

    #[tokio::test]
    async fn admin_without_assignments_gets_empty_list_without_lookup() {
        let systems = Arc::new(FakeSystems {
            systems: vec![system(5, "SIGA")],
            ..FakeSystems::default()
        });
        let service = SystemAssignmentService::new(
            Arc::new(FakeAssignments(vec![assignment(1, 2, 5, true)])),
            systems.clone(),
        );

        let result = service.systems_for_admin(UserId::new(9)).await;

        assert!(matches!(result, Ok(ref list) if list.is_empty()));
        assert!(systems.lookups().is_empty());
    }

    #[tokio::test]
    async fn returns_only_actively_assigned_systems() {
        let systems = Arc::new(FakeSystems {
            systems: vec![system(5, "SIGA"), system(6, "SCI"), system(7, "SAP")],
            ..FakeSystems::default()
        });
        let service = SystemAssignmentService::new(
            Arc::new(FakeAssignments(vec![
                assignment(1, 3, 5, true),
                assignment(2, 3, 6, false),
                assignment(3, 3, 7, true),
                assignment(4, 4, 6, true),
            ])),
            systems.clone(),
        );

        let result = service
            .systems_for_admin(UserId::new(3))
            .await
            .unwrap_or_else(|error| panic!("query failed: {error}"));

        let ids: Vec<i64> = result.iter().map(|system| system.id.value()).collect();
        assert_eq!(ids, vec![5, 7]);
        assert_eq!(
            systems.lookups(),
            vec![vec![SystemId::new(5), SystemId::new(7)]]
        );
    }

    #[tokio::test]
    async fn duplicate_assignments_are_passed_through_to_lookup() {
        let systems = Arc::new(FakeSystems {
            systems: vec![system(5, "SIGA")],
            ..FakeSystems::default()
        });
        let service = SystemAssignmentService::new(
            Arc::new(FakeAssignments(vec![
                assignment(1, 3, 5, true),
                assignment(2, 3, 5, true),
            ])),
            systems.clone(),
        );

        let result = service
            .systems_for_admin(UserId::new(3))
            .await
            .unwrap_or_else(|error| panic!("query failed: {error}"));

        assert_eq!(result.len(), 1);
        assert_eq!(
            systems.lookups(),
            vec![vec![SystemId::new(5), SystemId::new(5)]]
        );
    }
}
