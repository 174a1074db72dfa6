//! User handlers.

use axum::{
    extract::Extension,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::domain::{Password, UserResponse, UserView};
use crate::errors::{AppError, AppResult};
use crate::infra::{DbSession, UserFields};
use crate::types::{Accepted, Created, MessageResponse, NoContent};

/// User create/replace request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "John Doe")]
    pub name: String,
    /// Email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Plain text password, hashed before storage
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl UserRequest {
    /// Hash the password and produce the fields to persist.
    fn into_fields(self) -> AppResult<UserFields> {
        let password = Password::new(&self.password)?;
        Ok(UserFields {
            name: self.name,
            email: self.email,
            password,
        })
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Create a user
#[utoipa::path(
    post,
    path = "/user",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    Extension(session): Extension<DbSession>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = session.users().create(payload.into_fields()?).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok(Created(UserResponse::from(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserView>),
        (status = 404, description = "No users in database")
    )
)]
pub async fn list_users(
    Extension(session): Extension<DbSession>,
) -> AppResult<Json<Vec<UserView>>> {
    let users = session.users().list().await?;

    if users.is_empty() {
        return Err(AppError::not_found("No users in database"));
    }

    Ok(Json(users.into_iter().map(UserView::from).collect()))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserView),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<UserView>> {
    let user = session
        .users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::user_not_found(id))?;

    Ok(Json(UserView::from(user)))
}

/// Replace a user's fields
#[utoipa::path(
    put,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 202, description = "User updated", body = MessageResponse),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Accepted> {
    session.users().update(id, payload.into_fields()?).await?;

    Ok(Accepted(MessageResponse::new(format!(
        "User with ID {} updated",
        id
    ))))
}

/// Delete a user
///
/// Blogs written by the user are kept with their creator cleared.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<NoContent> {
    session.users().delete(id).await?;

    tracing::info!(user_id = id, "User deleted");

    Ok(NoContent)
}
