use rolebook_application::{RoleService, UserDirectoryService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_service: RoleService,
    pub user_directory_service: UserDirectoryService,
}
