use rolebook_core::{AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Privilege, UserId};

/// Unique identifier for a persisted role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId(Uuid);

impl RoleId {
    /// Creates a new random role identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a role identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Parses a transport value, returning `None` for malformed input.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RoleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RoleId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// An assembled role that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDraft {
    name: NonEmptyString,
    privileges: Vec<Privilege>,
    users: Vec<UserId>,
}

impl RoleDraft {
    /// Creates a draft; the name is kept verbatim but must not be blank.
    pub fn new(
        name: impl Into<String>,
        privileges: Vec<Privilege>,
        users: Vec<UserId>,
    ) -> AppResult<Self> {
        Ok(Self {
            name: NonEmptyString::new(name)?,
            privileges,
            users,
        })
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns role privileges in assembly order.
    #[must_use]
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    /// Returns member user references.
    #[must_use]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Turns the draft into a role with a store-assigned identifier.
    #[must_use]
    pub fn into_role(self, id: RoleId) -> Role {
        Role {
            id,
            name: self.name,
            privileges: self.privileges,
            users: self.users,
        }
    }
}

/// A named bundle of privileges with member user references.
///
/// Members come from the resolved user list verbatim, so a role assembled
/// from repeated ids keeps the repeats. Only [`Role::add_member`] skips ids
/// that are already present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
    privileges: Vec<Privilege>,
    users: Vec<UserId>,
}

impl Role {
    /// Rebuilds a role from stored state.
    #[must_use]
    pub fn from_parts(
        id: RoleId,
        name: NonEmptyString,
        privileges: Vec<Privilege>,
        users: Vec<UserId>,
    ) -> Self {
        Self {
            id,
            name,
            privileges,
            users,
        }
    }

    /// Returns the role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the role name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns role privileges in assembly order.
    #[must_use]
    pub fn privileges(&self) -> &[Privilege] {
        &self.privileges
    }

    /// Returns member user references.
    #[must_use]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Records a member reference unless it is already present.
    ///
    /// Repeats already in the list are left as they are. Returns whether the
    /// member list changed.
    pub fn add_member(&mut self, user_id: UserId) -> bool {
        if self.users.contains(&user_id) {
            return false;
        }

        self.users.push(user_id);
        true
    }
}
