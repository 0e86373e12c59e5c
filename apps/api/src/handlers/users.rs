use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::dto::{RegisterUserRequest, UserResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn register_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .user_directory_service
        .register_user(payload.email.as_str())
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .user_directory_service
        .get_user(user_id.as_str())
        .await?;

    Ok(Json(UserResponse::from(user)))
}
