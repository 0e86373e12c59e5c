use std::collections::HashMap;

use async_trait::async_trait;
use rolebook_application::RoleRepository;
use rolebook_core::{AppError, AppResult};
use rolebook_domain::{Role, RoleDraft, RoleId};
use tokio::sync::RwLock;

/// In-memory role repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<RoleId, Role>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn save(&self, draft: RoleDraft) -> AppResult<Role> {
        let role = draft.into_role(RoleId::new());
        self.roles.write().await.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.write().await;
        let Some(stored) = roles.get_mut(&role.id()) else {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                role.id()
            )));
        };

        *stored = role.clone();
        Ok(role)
    }

    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.roles.read().await.get(&role_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.read().await.values().cloned().collect();
        roles.sort_by(|left, right| {
            left.name()
                .as_str()
                .cmp(right.name().as_str())
                .then_with(|| left.id().as_uuid().cmp(&right.id().as_uuid()))
        });

        Ok(roles)
    }
}
