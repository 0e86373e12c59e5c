use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rolebook_core::AppError;
use serde::{Deserialize, Serialize};

/// Privileges that can be bundled into a role.
///
/// The set is closed: anything outside it never reaches a persisted role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Privilege {
    /// Full administrative access.
    Admin,
    /// Baseline access for regular accounts.
    User,
    /// Allows reading records.
    Read,
    /// Allows creating records.
    Create,
    /// Allows updating records.
    Update,
    /// Allows deleting records.
    Delete,
}

impl Privilege {
    /// Returns the stable storage value for this privilege.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::User => "USER",
            Self::Read => "READ",
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Returns all known privileges.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Privilege] = &[
            Privilege::Admin,
            Privilege::User,
            Privilege::Read,
            Privilege::Create,
            Privilege::Update,
            Privilege::Delete,
        ];

        ALL
    }

    /// Parses free-text input after upper-casing it.
    ///
    /// Returns `None` when the normalized value is not a known privilege.
    #[must_use]
    pub fn parse_normalized(value: &str) -> Option<Self> {
        Self::from_str(value.to_uppercase().as_str()).ok()
    }
}

impl Display for Privilege {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Privilege {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ADMIN" => Ok(Self::Admin),
            "USER" => Ok(Self::User),
            "READ" => Ok(Self::Read),
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            _ => Err(AppError::Validation(format!(
                "unknown privilege value '{value}'"
            ))),
        }
    }
}
