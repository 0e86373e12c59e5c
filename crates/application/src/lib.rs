//! Application services and ports.

#![forbid(unsafe_code)]

mod role_ports;
mod role_service;
mod user_directory_service;

pub use role_ports::{
    CreateRoleInput, CreateRoleRequest, MessageEnvelope, RoleRepository, RoleSummary, UserRef,
    UserRepository, UserSummary,
};
pub use role_service::{
    LinkPolicy, MESSAGE_UTC_OFFSET_SECONDS, RoleService, filter_privileges, message_envelope,
    message_envelope_at, role_summary,
};
pub use user_directory_service::UserDirectoryService;
