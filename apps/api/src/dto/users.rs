use rolebook_domain::User;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for user registration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/register-user-request.ts"
)]
pub struct RegisterUserRequest {
    pub email: String,
}

/// API representation of a user account.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    /// `null` until a role has been attached.
    pub roles: Option<Vec<String>>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id().to_string(),
            email: value.email().as_str().to_owned(),
            roles: value
                .roles()
                .map(|role_ids| role_ids.iter().map(ToString::to_string).collect()),
        }
    }
}
