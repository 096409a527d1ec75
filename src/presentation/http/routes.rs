// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::users,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    routing::{delete, get, patch, post},
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health-check", get(health_check))
        .route("/users/health-check", get(health_check))
        .route("/users/create", post(users::create_user))
        .route("/users/get/{id}", get(users::get_user))
        .route("/users", get(users::list_users))
        .route("/users/", get(users::list_users))
        .route("/users/{id}", patch(users::update_user))
        .route("/users/delete/{id}", delete(users::delete_user))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/users/health-check",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health_check() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
