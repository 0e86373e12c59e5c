pub mod health;
pub mod roles;
pub mod users;
