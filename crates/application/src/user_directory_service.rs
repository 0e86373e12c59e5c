//! Account directory used to register and look up users that roles can be
//! attached to.

use std::sync::Arc;

use rolebook_core::{AppError, AppResult};
use rolebook_domain::{EmailAddress, User, UserId};
use tracing::info;

use crate::role_ports::UserRepository;

/// Application service for user account lookups and registration.
#[derive(Clone)]
pub struct UserDirectoryService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Registers a user with no roles. Emails are unique (case-insensitive).
    pub async fn register_user(&self, email: &str) -> AppResult<User> {
        let email = EmailAddress::new(email)?;

        if self
            .user_repository
            .find_by_email(email.as_str())
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        let user = self
            .user_repository
            .create(User::new(UserId::new(), email))
            .await?;
        info!(user_id = %user.id(), "registered user");

        Ok(user)
    }

    /// Returns the user with the given identifier.
    pub async fn get_user(&self, user_id: &str) -> AppResult<User> {
        let user = match UserId::parse(user_id) {
            Some(parsed) => self.user_repository.find_by_id(parsed).await?,
            None => None,
        };

        user.ok_or_else(|| AppError::account_id_not_found(user_id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use rolebook_core::{AppError, AppResult};
    use rolebook_domain::{User, UserId};

    use super::UserDirectoryService;
    use crate::role_ports::UserRepository;

    #[derive(Default)]
    struct FakeUserRepository {
        users: Mutex<HashMap<UserId, User>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepository {
        async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
            Ok(self.users.lock().await.get(&user_id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
            Ok(self
                .users
                .lock()
                .await
                .values()
                .find(|user| user.email().as_str().eq_ignore_ascii_case(email))
                .cloned())
        }

        async fn create(&self, user: User) -> AppResult<User> {
            self.users.lock().await.insert(user.id(), user.clone());
            Ok(user)
        }

        async fn save(&self, user: User) -> AppResult<User> {
            self.users.lock().await.insert(user.id(), user.clone());
            Ok(user)
        }
    }

    fn service() -> UserDirectoryService {
        UserDirectoryService::new(Arc::new(FakeUserRepository::default()))
    }

    #[tokio::test]
    async fn register_user_normalizes_email_and_starts_without_roles() {
        let service = service();

        let user = service.register_user("  Ana@Example.COM ").await;

        let Ok(user) = user else {
            panic!("registration must succeed");
        };
        assert_eq!(user.email().as_str(), "ana@example.com");
        assert!(user.roles().is_none());
    }

    #[tokio::test]
    async fn register_user_rejects_duplicate_email() {
        let service = service();
        assert!(service.register_user("ana@example.com").await.is_ok());

        let result = service.register_user("ANA@example.com").await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn register_user_rejects_invalid_email() {
        let result = service().register_user("not-an-email").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn get_user_reports_missing_account() {
        let result = service().get_user("missing-id").await;

        match result {
            Err(AppError::NotFound(message)) => {
                assert_eq!(message, "There is not an account with id : missing-id");
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
