//! PostgreSQL-backed user repository.

use async_trait::async_trait;
use sqlx::PgPool;

use rolebook_application::UserRepository;
use rolebook_core::{AppError, AppResult};
use rolebook_domain::{EmailAddress, RoleId, User, UserId};

/// PostgreSQL implementation of the user repository port.
#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: uuid::Uuid,
    email: String,
    role_ids: Option<Vec<uuid::Uuid>>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(row.email).map_err(|error| {
            AppError::Internal(format!("stored email for user '{}' is invalid: {error}", row.id))
        })?;

        Ok(User::from_parts(
            UserId::from_uuid(row.id),
            email,
            row.role_ids
                .map(|role_ids| role_ids.into_iter().map(RoleId::from_uuid).collect()),
        ))
    }
}

fn role_id_column(user: &User) -> Option<Vec<uuid::Uuid>> {
    user.roles()
        .map(|role_ids| role_ids.iter().map(RoleId::as_uuid).collect())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, role_ids
            FROM users
            WHERE id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by id: {error}")))?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, role_ids
            FROM users
            WHERE LOWER(email) = LOWER($1)
            LIMIT 1
            "#,
        )
        .bind(email.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to find user by email: {error}")))?;

        row.map(User::try_from).transpose()
    }

    async fn create(&self, user: User) -> AppResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, role_ids)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(role_id_column(&user))
        .execute(&self.pool)
        .await
        .map_err(|error| email_conflict_or_internal(error, "create user"))?;

        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, role_ids)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET email = EXCLUDED.email,
                role_ids = EXCLUDED.role_ids
            "#,
        )
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(role_id_column(&user))
        .execute(&self.pool)
        .await
        .map_err(|error| email_conflict_or_internal(error, "save user"))?;

        Ok(user)
    }
}

fn email_conflict_or_internal(error: sqlx::Error, operation: &str) -> AppError {
    if let sqlx::Error::Database(ref database_error) = error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict("an account with this email already exists".to_owned());
    }

    AppError::Internal(format!("failed to {operation}: {error}"))
}
