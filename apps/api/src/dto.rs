mod common;
mod roles;
mod users;

pub use common::{HealthResponse, MessageResponse};
pub use roles::{
    AssignRoleUsersByEmailRequest, AssignRoleUsersRequest, CreateRoleRequest, RoleResponse,
    UserRefRequest, UserSummaryResponse,
};
pub use users::{RegisterUserRequest, UserResponse};
