use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Json},
};
use serde_json::Value as JsonValue;

use crate::{
    dto::user_dto::{NewUser, UserPatch, UserResponse},
    error::Result,
    AppState,
};

pub const USER_CREATED: &str = "Добавлен новый пользователь!";
pub const USER_UPDATED: &str = "Обновление информации о пользователе выполнено!";
pub const USER_DELETED: &str = "Удаление пользователя выполнено!";

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    responses(
        (status = 200, description = "All users in insertion order", body = [UserResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_all().await?;
    let body: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
    Ok(Json(body))
}

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = NewUser,
    responses(
        (status = 200, description = "User created", body = String),
        (status = 400, description = "Missing field or malformed body")
    )
)]
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(body) = payload?;
    state.user_service.create(NewUser::from_json(body)?).await?;
    Ok(USER_CREATED)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserPatch,
    responses(
        (status = 200, description = "User updated", body = String),
        (status = 400, description = "Malformed body"),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    let Json(body) = payload?;
    state
        .user_service
        .update(id, UserPatch::from_json(body)?)
        .await?;
    Ok(USER_UPDATED)
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "User not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse> {
    let Path(id) = id?;
    state.user_service.delete(id).await?;
    Ok(USER_DELETED)
}
