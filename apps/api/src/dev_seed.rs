use rolebook_core::{AppError, AppResult};
use tracing::info;

use crate::state::AppState;

const DEV_SEED_EMAILS: [&str; 2] = ["admin@rolebook.local", "member@rolebook.local"];

pub async fn run(app_state: &AppState) -> AppResult<()> {
    for email in DEV_SEED_EMAILS {
        match app_state.user_directory_service.register_user(email).await {
            Ok(user) => info!(user_id = %user.id(), email, "seeded development user"),
            Err(AppError::Conflict(_)) => info!(email, "development user already present"),
            Err(error) => return Err(error),
        }
    }

    Ok(())
}
