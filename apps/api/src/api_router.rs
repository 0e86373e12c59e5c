use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    let role_routes = Router::new()
        .route(
            "/api/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route("/api/roles/{role_id}", get(handlers::roles::get_role_handler))
        .route(
            "/api/roles/{role_id}/users",
            post(handlers::roles::assign_role_users_handler),
        )
        .route(
            "/api/roles/{role_id}/users/by-email",
            post(handlers::roles::assign_role_users_by_email_handler),
        );

    let user_routes = Router::new()
        .route("/api/users", post(handlers::users::register_user_handler))
        .route(
            "/api/users/{user_id}",
            get(handlers::users::get_user_handler),
        );

    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(role_routes)
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
