use super::*;

use crate::role_ports::UserRef;

impl RoleService {
    /// Resolves user identifiers into user records, in input order.
    ///
    /// `None` entries are skipped before any lookup. The first identifier
    /// without a matching account aborts the whole resolution.
    pub async fn resolve_users(&self, user_ids: &[Option<String>]) -> AppResult<Vec<User>> {
        let mut users = Vec::with_capacity(user_ids.len());
        for user_id in user_ids.iter().flatten() {
            let user = self
                .find_user(user_id)
                .await?
                .ok_or_else(|| AppError::account_not_found(user_id))?;
            users.push(user);
        }

        Ok(users)
    }

    /// Resolves email references into user records, in input order.
    ///
    /// Same skipping and fail-fast rules as [`RoleService::resolve_users`].
    pub async fn resolve_users_by_email(
        &self,
        references: &[Option<UserRef>],
    ) -> AppResult<Vec<User>> {
        let mut users = Vec::with_capacity(references.len());
        for reference in references.iter().flatten() {
            let user = self
                .user_repository
                .find_by_email(reference.email.as_str())
                .await?
                .ok_or_else(|| AppError::account_not_found(reference))?;
            users.push(user);
        }

        Ok(users)
    }
}
