use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use rolebook_application::UserRef;

use crate::dto::{
    AssignRoleUsersByEmailRequest, AssignRoleUsersRequest, CreateRoleRequest, MessageResponse,
    RoleResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .role_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state.role_service.create_role(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
) -> ApiResult<Json<RoleResponse>> {
    let role = state.role_service.get_role(role_id.as_str()).await?;

    Ok(Json(RoleResponse::from(role)))
}

pub async fn assign_role_users_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<AssignRoleUsersRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let message = state
        .role_service
        .assign_role(role_id.as_str(), payload.users)
        .await?;

    Ok(Json(MessageResponse::from(message)))
}

pub async fn assign_role_users_by_email_handler(
    State(state): State<AppState>,
    Path(role_id): Path<String>,
    Json(payload): Json<AssignRoleUsersByEmailRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let references: Vec<Option<UserRef>> = payload
        .users
        .into_iter()
        .map(|reference| reference.map(UserRef::from))
        .collect();

    let message = state
        .role_service
        .assign_role_by_email(role_id.as_str(), &references)
        .await?;

    Ok(Json(MessageResponse::from(message)))
}
