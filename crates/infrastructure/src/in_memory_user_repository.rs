use std::collections::HashMap;

use async_trait::async_trait;
use rolebook_application::UserRepository;
use rolebook_core::{AppError, AppResult};
use rolebook_domain::{User, UserId};
use tokio::sync::RwLock;

/// In-memory user repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

fn email_taken_by_other(users: &HashMap<UserId, User>, candidate: &User) -> bool {
    users.values().any(|stored| {
        stored.id() != candidate.id()
            && stored
                .email()
                .as_str()
                .eq_ignore_ascii_case(candidate.email().as_str())
    })
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = email.trim();
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email().as_str().eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id()) || email_taken_by_other(&users, &user) {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if email_taken_by_other(&users, &user) {
            return Err(AppError::Conflict(
                "an account with this email already exists".to_owned(),
            ));
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }
}
