//! Role administration: privilege filtering, user resolution, role assembly,
//! role-to-user linking and response mapping.
//!
//! The service keeps no state between calls. Every lookup goes to the
//! repositories, and concurrent assignments touching the same user are not
//! coordinated: the last write of a user's role list wins.

use std::sync::Arc;

use rolebook_core::{AppError, AppResult};
use rolebook_domain::{Role, RoleId, User, UserId};

use crate::role_ports::{RoleRepository, UserRepository};

mod assembly;
mod linking;
mod mapping;
mod privileges;
mod resolution;
mod workflows;


pub use mapping::{MESSAGE_UTC_OFFSET_SECONDS, message_envelope, message_envelope_at, role_summary};
pub use privileges::filter_privileges;

/// Controls how a role is attached to a list of users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPolicy {
    /// Resolve and persist one user at a time. A missing user aborts the
    /// run and leaves earlier users written.
    #[default]
    Eager,
    /// Check that every user exists before writing any of them.
    ValidateFirst,
}

impl LinkPolicy {
    /// Returns the configuration string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::ValidateFirst => "validate_first",
        }
    }

    /// Parses a configuration string into a link policy.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "eager" => Ok(Self::Eager),
            "validate_first" => Ok(Self::ValidateFirst),
            _ => Err(AppError::Validation(format!(
                "unknown role link policy '{value}'"
            ))),
        }
    }
}

/// Application service for role administration workflows.
#[derive(Clone)]
pub struct RoleService {
    user_repository: Arc<dyn UserRepository>,
    role_repository: Arc<dyn RoleRepository>,
    link_policy: LinkPolicy,
}

impl RoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        role_repository: Arc<dyn RoleRepository>,
        link_policy: LinkPolicy,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            link_policy,
        }
    }

    /// Returns the configured link policy.
    #[must_use]
    pub fn link_policy(&self) -> LinkPolicy {
        self.link_policy
    }

    async fn find_user(&self, raw_user_id: &str) -> AppResult<Option<User>> {
        match UserId::parse(raw_user_id) {
            Some(user_id) => self.user_repository.find_by_id(user_id).await,
            None => Ok(None),
        }
    }

    async fn require_role(&self, raw_role_id: &str) -> AppResult<Role> {
        let role = match RoleId::parse(raw_role_id) {
            Some(role_id) => self.role_repository.find_by_id(role_id).await?,
            None => None,
        };

        role.ok_or_else(|| AppError::NotFound(format!("role '{raw_role_id}' was not found")))
    }
}
