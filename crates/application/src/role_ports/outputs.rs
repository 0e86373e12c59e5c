use chrono::{DateTime, FixedOffset};
use rolebook_domain::User;

/// Read-only projection of a user embedded in role views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    /// User identifier.
    pub id: String,
    /// User email.
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            email: user.email().as_str().to_owned(),
        }
    }
}

/// Role view returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSummary {
    /// Stable role identifier.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Privilege names in role order.
    pub privileges: Vec<String>,
    /// Caller-supplied member summaries.
    pub users: Vec<UserSummary>,
}

/// Human-readable message paired with the time it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageEnvelope {
    /// Message text.
    pub message: String,
    /// Creation time in the fixed UTC+7 offset.
    pub timestamp: DateTime<FixedOffset>,
}
