use rolebook_application::{RoleSummary, UserRef, UserSummary};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default)]
    pub privileges: Vec<String>,
    #[serde(default)]
    pub users: Vec<Option<String>>,
}

impl From<CreateRoleRequest> for rolebook_application::CreateRoleRequest {
    fn from(value: CreateRoleRequest) -> Self {
        Self {
            name: value.name,
            privileges: value.privileges,
            users: value.users,
        }
    }
}

/// Incoming payload for attaching a role to users by id.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-role-users-request.ts"
)]
pub struct AssignRoleUsersRequest {
    #[serde(default)]
    pub users: Option<Vec<String>>,
}

/// Account reference by email.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-ref-request.ts"
)]
pub struct UserRefRequest {
    pub email: String,
}

impl From<UserRefRequest> for UserRef {
    fn from(value: UserRefRequest) -> Self {
        Self { email: value.email }
    }
}

/// Incoming payload for attaching a role to users by email.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-role-users-by-email-request.ts"
)]
pub struct AssignRoleUsersByEmailRequest {
    #[serde(default)]
    pub users: Vec<Option<UserRefRequest>>,
}

/// User projection embedded in role responses.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-summary-response.ts"
)]
pub struct UserSummaryResponse {
    pub id: String,
    pub email: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(value: UserSummary) -> Self {
        Self {
            id: value.id,
            email: value.email,
        }
    }
}

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub privileges: Vec<String>,
    pub users: Vec<UserSummaryResponse>,
}

impl From<RoleSummary> for RoleResponse {
    fn from(value: RoleSummary) -> Self {
        Self {
            id: value.id,
            name: value.name,
            privileges: value.privileges,
            users: value
                .users
                .into_iter()
                .map(UserSummaryResponse::from)
                .collect(),
        }
    }
}
