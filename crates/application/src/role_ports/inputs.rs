use std::fmt::{Display, Formatter};

use rolebook_domain::Privilege;

/// Input payload for assembling and persisting a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Role name, kept verbatim.
    pub name: String,
    /// Privileges already filtered against the closed set.
    pub privileges: Vec<Privilege>,
    /// Member user identifiers; `None` entries are skipped.
    pub users: Vec<Option<String>>,
}

/// Raw role creation payload before privilege filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleRequest {
    /// Role name, kept verbatim.
    pub name: String,
    /// Free-text privilege names.
    pub privileges: Vec<String>,
    /// Member user identifiers; `None` entries are skipped.
    pub users: Vec<Option<String>>,
}

/// Reference to an existing account by email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    /// Account email used as the lookup key.
    pub email: String,
}

impl Display for UserRef {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.email.as_str())
    }
}
