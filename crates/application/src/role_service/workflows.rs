use super::*;

use tracing::debug;

use crate::role_ports::{
    CreateRoleInput, CreateRoleRequest, MessageEnvelope, RoleSummary, UserRef, UserSummary,
};

impl RoleService {
    /// Creates a role from a raw request and attaches it to its members.
    pub async fn create_role(&self, request: CreateRoleRequest) -> AppResult<RoleSummary> {
        let privileges = filter_privileges(&request.privileges);
        let (role, members) = self
            .save_role_with_members(CreateRoleInput {
                name: request.name,
                privileges,
                users: request.users,
            })
            .await?;

        let member_ids: Vec<String> = members.iter().map(|user| user.id().to_string()).collect();
        self.add_role_to_users(Some(member_ids.as_slice()), &role)
            .await?;

        let summaries = members.iter().map(UserSummary::from).collect();
        Ok(role_summary(&role, summaries))
    }

    /// Attaches an existing role to the listed users and records them as
    /// role members.
    pub async fn assign_role(
        &self,
        role_id: &str,
        user_ids: Option<Vec<String>>,
    ) -> AppResult<MessageEnvelope> {
        let role = self.require_role(role_id).await?;
        let user_ids = user_ids.unwrap_or_default();
        self.link_members(role, &user_ids).await
    }

    /// Attaches an existing role to the users behind the email references.
    pub async fn assign_role_by_email(
        &self,
        role_id: &str,
        references: &[Option<UserRef>],
    ) -> AppResult<MessageEnvelope> {
        let role = self.require_role(role_id).await?;
        let user_ids: Vec<String> = self
            .resolve_users_by_email(references)
            .await?
            .iter()
            .map(|user| user.id().to_string())
            .collect();

        self.link_members(role, &user_ids).await
    }

    /// Returns one role with summaries of its current members.
    pub async fn get_role(&self, role_id: &str) -> AppResult<RoleSummary> {
        let role = self.require_role(role_id).await?;
        let members = self.member_summaries(&role).await?;
        Ok(role_summary(&role, members))
    }

    /// Returns every role with summaries of its current members.
    pub async fn list_roles(&self) -> AppResult<Vec<RoleSummary>> {
        let roles = self.role_repository.list().await?;
        let mut summaries = Vec::with_capacity(roles.len());
        for role in &roles {
            let members = self.member_summaries(role).await?;
            summaries.push(role_summary(role, members));
        }

        Ok(summaries)
    }

    async fn link_members(
        &self,
        mut role: Role,
        user_ids: &[String],
    ) -> AppResult<MessageEnvelope> {
        let outcome = self.link_role_to_users(user_ids, &role).await;

        // Members are recorded for every user written, even when linking stopped early.
        let mut members_changed = false;
        for user_id in outcome.written {
            members_changed |= role.add_member(user_id);
        }
        if members_changed {
            role = self.role_repository.update(role).await?;
        }
        outcome.result?;

        Ok(message_envelope(format!(
            "Role '{}' was assigned to {} user(s)",
            role.name().as_str(),
            user_ids.len()
        )))
    }

    async fn member_summaries(&self, role: &Role) -> AppResult<Vec<UserSummary>> {
        let mut members = Vec::with_capacity(role.users().len());
        for user_id in role.users() {
            match self.user_repository.find_by_id(*user_id).await? {
                Some(user) => members.push(UserSummary::from(&user)),
                None => debug!(
                    role_id = %role.id(),
                    user_id = %user_id,
                    "skipping missing role member"
                ),
            }
        }

        Ok(members)
    }
}
