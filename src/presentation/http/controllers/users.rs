// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::DeleteUserCommand, dto::UserDto, queries::users::GetUserQuery,
};
use crate::presentation::http::controllers::user_requests::{
    CreateUserRequest, ListUsersParams, UpdateUserRequest,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{PathParam, QueryParams, ValidatedJson};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    post,
    path = "/users/create",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created.", body = UserDto),
        (status = 400, description = "Invalid payload or duplicate username/email.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .create_user(payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/users/get/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "The user.", body = UserDto),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { user_id: id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/users/",
    params(ListUsersParams),
    responses(
        (status = 200, description = "A page of users ordered by id.", body = [UserDto]),
        (status = 404, description = "The page is empty.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ListUsersParams>,
) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated.", body = UserDto),
        (status = 400, description = "Invalid payload or duplicate username/email.", body = ErrorResponse),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_user(payload.into_command(id))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/users/delete/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted."),
        (status = 404, description = "No user with this id.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::OK)
}
