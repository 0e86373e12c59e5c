//! PostgreSQL-backed role repository.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::warn;

use rolebook_application::RoleRepository;
use rolebook_core::{AppError, AppResult, NonEmptyString};
use rolebook_domain::{Privilege, Role, RoleDraft, RoleId, UserId};

/// PostgreSQL implementation of the role repository port.
#[derive(Clone)]
pub struct PostgresRoleRepository {
    pool: PgPool,
}

impl PostgresRoleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    id: uuid::Uuid,
    name: String,
    privileges: Vec<String>,
    member_ids: Vec<uuid::Uuid>,
}

impl TryFrom<RoleRow> for Role {
    type Error = AppError;

    fn try_from(row: RoleRow) -> Result<Self, Self::Error> {
        let name = NonEmptyString::new(row.name).map_err(|error| {
            AppError::Internal(format!("stored name for role '{}' is invalid: {error}", row.id))
        })?;

        let privileges = row
            .privileges
            .iter()
            .filter_map(|value| match Privilege::from_str(value) {
                Ok(privilege) => Some(privilege),
                Err(_) => {
                    warn!(
                        role_id = %row.id,
                        privilege = value.as_str(),
                        "ignoring unknown stored privilege"
                    );
                    None
                }
            })
            .collect();

        Ok(Role::from_parts(
            RoleId::from_uuid(row.id),
            name,
            privileges,
            row.member_ids.into_iter().map(UserId::from_uuid).collect(),
        ))
    }
}

fn privilege_column(privileges: &[Privilege]) -> Vec<String> {
    privileges
        .iter()
        .map(|privilege| privilege.as_str().to_owned())
        .collect()
}

fn member_column(users: &[UserId]) -> Vec<uuid::Uuid> {
    users.iter().map(UserId::as_uuid).collect()
}

#[async_trait]
impl RoleRepository for PostgresRoleRepository {
    async fn save(&self, draft: RoleDraft) -> AppResult<Role> {
        let role_id = sqlx::query_scalar::<_, uuid::Uuid>(
            r#"
            INSERT INTO roles (name, privileges, member_ids)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(draft.name().as_str())
        .bind(privilege_column(draft.privileges()))
        .bind(member_column(draft.users()))
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to save role: {error}")))?;

        Ok(draft.into_role(RoleId::from_uuid(role_id)))
    }

    async fn update(&self, role: Role) -> AppResult<Role> {
        let rows_affected = sqlx::query(
            r#"
            UPDATE roles
            SET name = $2,
                privileges = $3,
                member_ids = $4
            WHERE id = $1
            "#,
        )
        .bind(role.id().as_uuid())
        .bind(role.name().as_str())
        .bind(privilege_column(role.privileges()))
        .bind(member_column(role.users()))
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to update role: {error}")))?
        .rows_affected();

        if rows_affected == 0 {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                role.id()
            )));
        }

        Ok(role)
    }

    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, privileges, member_ids
            FROM roles
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(role_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find role: {error}")))?;

        row.map(Role::try_from).transpose()
    }

    async fn list(&self) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT id, name, privileges, member_ids
            FROM roles
            ORDER BY name COLLATE "C", id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list roles: {error}")))?;

        rows.into_iter().map(Role::try_from).collect()
    }
}

#[cfg(test)]
mod tests;
