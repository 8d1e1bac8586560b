use async_trait::async_trait;
use chrono::Utc;
use sedapal_application::{
    AdminSystemAssignmentRecord, AdminSystemRepository, NewAdminSystemAssignment, NewUser,
    SystemRecord, SystemRepository, UserRecord, UserRepository,
};
use sedapal_core::{AppError, AppResult};
use sedapal_domain::{AssignmentId, SystemId, UserId, UserRole};
use tokio::sync::RwLock;

/// In-memory store for users, systems and administrator assignments.
///
/// One lock guards all three tables so that combined writes stay atomic.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    state: RwLock<AccountState>,
}

#[derive(Debug, Default)]
struct AccountState {
    users: Vec<UserRecord>,
    systems: Vec<SystemRecord>,
    assignments: Vec<AdminSystemAssignmentRecord>,
    next_user_id: i64,
    next_assignment_id: i64,
}

impl AccountState {
    fn insert_user(&mut self, user: NewUser) -> AppResult<UserRecord> {
        if self.users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        self.next_user_id += 1;
        let record = UserRecord {
            id: UserId::new(self.next_user_id),
            given_name: user.given_name,
            family_name: user.family_name,
            email: user.email,
            password: user.password,
            role: user.role,
            created_at: Utc::now(),
            active: user.active.unwrap_or(true),
        };
        self.users.push(record.clone());

        Ok(record)
    }

    fn check_assignment_targets(&self, admin_id: UserId, system_id: SystemId) -> AppResult<()> {
        let admin_known = self.users.iter().any(|user| user.id == admin_id);
        let system_known = self.systems.iter().any(|system| system.id == system_id);

        if admin_known && system_known {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "system '{system_id}' or its administrator does not exist"
            )))
        }
    }

    fn insert_assignment(
        &mut self,
        assignment: NewAdminSystemAssignment,
    ) -> AdminSystemAssignmentRecord {
        self.next_assignment_id += 1;
        let record = AdminSystemAssignmentRecord {
            id: AssignmentId::new(self.next_assignment_id),
            admin_id: assignment.admin_id,
            system_id: assignment.system_id,
            assigned_at: Utc::now(),
            active: assignment.active.unwrap_or(true),
        };
        self.assignments.push(record.clone());

        record
    }
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with the given systems.
    #[must_use]
    pub fn with_systems(systems: Vec<SystemRecord>) -> Self {
        Self {
            state: RwLock::new(AccountState {
                systems,
                ..AccountState::default()
            }),
        }
    }

    /// Adds or replaces a system row.
    pub async fn upsert_system(&self, system: SystemRecord) {
        let mut state = self.state.write().await;
        state.systems.retain(|existing| existing.id != system.id);
        state.systems.push(system);
        state.systems.sort_by_key(|existing| existing.id.value());
    }
}

#[async_trait]
impl UserRepository for InMemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserRecord>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .state
            .read()
            .await
            .users
            .iter()
            .any(|user| user.email == email))
    }

    async fn find_by_role_and_active(
        &self,
        role: UserRole,
        active: bool,
    ) -> AppResult<Vec<UserRecord>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .iter()
            .filter(|user| user.role == role && user.active == active)
            .cloned()
            .collect())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
        active: bool,
    ) -> AppResult<Option<UserRecord>> {
        Ok(self
            .state
            .read()
            .await
            .users
            .iter()
            .find(|user| user.email == email && user.password == password && user.active == active)
            .cloned())
    }

    async fn save(&self, user: NewUser) -> AppResult<UserRecord> {
        self.state.write().await.insert_user(user)
    }

    async fn save_with_system_assignment(
        &self,
        user: NewUser,
        system_id: SystemId,
    ) -> AppResult<(UserRecord, AdminSystemAssignmentRecord)> {
        let mut state = self.state.write().await;

        if !state.systems.iter().any(|system| system.id == system_id) {
            return Err(AppError::Validation(format!(
                "system '{system_id}' or its administrator does not exist"
            )));
        }

        let user = state.insert_user(user)?;
        let assignment = state.insert_assignment(NewAdminSystemAssignment {
            admin_id: user.id,
            system_id,
            active: Some(true),
        });

        Ok((user, assignment))
    }
}

#[async_trait]
impl SystemRepository for InMemoryAccountRepository {
    async fn find_all_by_ids(&self, ids: &[SystemId]) -> AppResult<Vec<SystemRecord>> {
        Ok(self
            .state
            .read()
            .await
            .systems
            .iter()
            .filter(|system| ids.contains(&system.id))
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: i32) -> AppResult<Vec<SystemRecord>> {
        Ok(self
            .state
            .read()
            .await
            .systems
            .iter()
            .filter(|system| system.status == status)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AdminSystemRepository for InMemoryAccountRepository {
    async fn find_by_admin_and_active(
        &self,
        admin_id: UserId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
        Ok(self
            .state
            .read()
            .await
            .assignments
            .iter()
            .filter(|assignment| assignment.admin_id == admin_id && assignment.active == active)
            .cloned()
            .collect())
    }

    async fn find_by_system_and_active(
        &self,
        system_id: SystemId,
        active: bool,
    ) -> AppResult<Vec<AdminSystemAssignmentRecord>> {
        Ok(self
            .state
            .read()
            .await
            .assignments
            .iter()
            .filter(|assignment| assignment.system_id == system_id && assignment.active == active)
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
            .state
            .read()
            .await
            .assignments
            .iter()
            .find(|assignment| {
                assignment.admin_id == admin_id
                    && assignment.system_id == system_id
                    && assignment.active == active
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
        assignment: NewAdminSystemAssignment,
    ) -> AppResult<AdminSystemAssignmentRecord> {
        let mut state = self.state.write().await;
        state.check_assignment_targets(assignment.admin_id, assignment.system_id)?;

        Ok(state.insert_assignment(assignment))
    }
}
