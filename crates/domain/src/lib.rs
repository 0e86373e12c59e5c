//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod privilege;
mod role;
mod user;

pub use privilege::Privilege;
pub use role::{Role, RoleDraft, RoleId};
pub use user::{EmailAddress, User, UserId};
