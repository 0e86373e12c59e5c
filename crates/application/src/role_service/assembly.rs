use super::*;

use rolebook_domain::RoleDraft;

use crate::role_ports::CreateRoleInput;

impl RoleService {
    /// Builds a role from the input and persists it with a single write.
    ///
    /// Member ids are resolved first, so a missing user fails the call
    /// before anything reaches the role store.
    pub async fn save_role(&self, input: CreateRoleInput) -> AppResult<Role> {
        self.save_role_with_members(input)
            .await
            .map(|(role, _)| role)
    }

    pub(super) async fn save_role_with_members(
        &self,
        input: CreateRoleInput,
    ) -> AppResult<(Role, Vec<User>)> {
        let members = self.resolve_users(&input.users).await?;
        let draft = RoleDraft::new(
            input.name,
            input.privileges,
            members.iter().map(User::id).collect(),
        )?;

        let role = self.role_repository.save(draft).await?;
        Ok((role, members))
    }
}
