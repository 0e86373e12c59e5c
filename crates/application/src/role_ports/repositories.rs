use async_trait::async_trait;

use rolebook_core::AppResult;
use rolebook_domain::{Role, RoleDraft, RoleId, User, UserId};

/// Repository port for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Finds a user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Inserts a new user. Fails with a conflict when the email is taken.
    async fn create(&self, user: User) -> AppResult<User>;

    /// Writes the full user state back, replacing the stored role list.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// Repository port for roles.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Persists a new role and assigns its identifier.
    async fn save(&self, draft: RoleDraft) -> AppResult<Role>;

    /// Replaces the stored state of an existing role.
    async fn update(&self, role: Role) -> AppResult<Role>;

    /// Finds a role by identifier.
    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Lists every role ordered by name in byte order, then by id.
    async fn list(&self) -> AppResult<Vec<Role>>;
}
