use super::*;

use std::collections::HashMap;

use tracing::{debug, info};

/// Users written by a link run, with the run's result.
///
/// `written` holds every user saved before a failure, so callers can keep
/// role membership in step with what reached the user store.
pub(super) struct LinkOutcome {
    pub(super) written: Vec<UserId>,
    pub(super) result: AppResult<()>,
}

impl RoleService {
    /// Appends the role to each listed user and persists every user as soon
    /// as it is updated.
    ///
    /// A `None` list is a no-op. Users written before a failure keep the role;
    /// nothing is rolled back. Under [`LinkPolicy::ValidateFirst`] every id is
    /// checked before the first write.
    pub async fn add_role_to_users(
        &self,
        user_ids: Option<&[String]>,
        role: &Role,
    ) -> AppResult<()> {
        match user_ids {
            Some(user_ids) => self.link_role_to_users(user_ids, role).await.result,
            None => Ok(()),
        }
    }

    pub(super) async fn link_role_to_users(
        &self,
        user_ids: &[String],
        role: &Role,
    ) -> LinkOutcome {
        let mut written = Vec::with_capacity(user_ids.len());
        let result = self.write_role_links(user_ids, role, &mut written).await;

        LinkOutcome { written, result }
    }

    async fn write_role_links(
        &self,
        user_ids: &[String],
        role: &Role,
        written: &mut Vec<UserId>,
    ) -> AppResult<()> {
        let mut validated: HashMap<UserId, User> = HashMap::new();
        if self.link_policy == LinkPolicy::ValidateFirst {
            for user_id in user_ids {
                let user = self.require_user_for_link(user_id).await?;
                validated.entry(user.id()).or_insert(user);
            }
        }

        for user_id in user_ids {
            // A repeated id misses the cache and is read back after its first write.
            let cached = UserId::parse(user_id).and_then(|parsed| validated.remove(&parsed));
            let mut user = match cached {
                Some(user) => user,
                None => self.require_user_for_link(user_id).await?,
            };

            user.attach_role(role.id());
            let saved = self.user_repository.save(user).await?;
            written.push(saved.id());
            debug!(role_id = %role.id(), user_id = user_id.as_str(), "attached role to user");
        }

        info!(
            role_id = %role.id(),
            users = user_ids.len(),
            policy = self.link_policy.as_str(),
            "linked role to users"
        );
        Ok(())
    }

    async fn require_user_for_link(&self, user_id: &str) -> AppResult<User> {
        self.find_user(user_id)
            .await?
            .ok_or_else(|| AppError::account_id_not_found(user_id))
    }
}
