use std::sync::Arc;

use rolebook_application::{
    LinkPolicy, RoleRepository, RoleService, UserDirectoryService, UserRepository,
};
use rolebook_infrastructure::{
    InMemoryRoleRepository, InMemoryUserRepository, PostgresRoleRepository,
    PostgresUserRepository,
};
use sqlx::PgPool;

use crate::state::AppState;

/// Repository adapters shared by every service.
pub struct RepositorySet {
    pub user_repository: Arc<dyn UserRepository>,
    pub role_repository: Arc<dyn RoleRepository>,
}

impl RepositorySet {
    pub fn in_memory() -> Self {
        Self {
            user_repository: Arc::new(InMemoryUserRepository::new()),
            role_repository: Arc::new(InMemoryRoleRepository::new()),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self {
            user_repository: Arc::new(PostgresUserRepository::new(pool.clone())),
            role_repository: Arc::new(PostgresRoleRepository::new(pool)),
        }
    }
}

pub fn build_app_state(repositories: RepositorySet, link_policy: LinkPolicy) -> AppState {
    AppState {
        role_service: RoleService::new(
            repositories.user_repository.clone(),
            repositories.role_repository,
            link_policy,
        ),
        user_directory_service: UserDirectoryService::new(repositories.user_repository),
    }
}
