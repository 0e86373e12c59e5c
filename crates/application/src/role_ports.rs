mod inputs;
mod outputs;
mod repositories;

pub use inputs::{CreateRoleInput, CreateRoleRequest, UserRef};
pub use outputs::{MessageEnvelope, RoleSummary, UserSummary};
pub use repositories::{RoleRepository, UserRepository};
