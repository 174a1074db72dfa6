//! Blog handlers.

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
use crate::domain::{BlogResponse, BlogView};
use crate::errors::{AppError, AppResult};
use crate::infra::DbSession;
use crate::types::{Accepted, Created, MessageResponse, NoContent};

/// Blog create request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BlogRequest {
    /// Post title
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Hello")]
    pub title: String,
    /// Post body
    #[validate(length(min = 1, message = "Body is required"))]
    #[schema(example = "First post")]
    pub body: String,
    /// Author of the post
    #[schema(example = 1)]
    pub creator_id: Option<i32>,
}

/// Blog update request; the creator is fixed at creation
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Hello again")]
    pub title: String,
    #[validate(length(min = 1, message = "Body is required"))]
    #[schema(example = "Edited post")]
    pub body: String,
}

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blog", post(create_blog))
        .route("/blogs", get(list_blogs))
        .route(
            "/blog/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

/// Create a blog post
#[utoipa::path(
    post,
    path = "/blog",
    tag = "Blogs",
    request_body = BlogRequest,
    responses(
        (status = 201, description = "Blog created", body = BlogResponse),
        (status = 404, description = "Creator not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_blog(
    Extension(session): Extension<DbSession>,
    ValidatedJson(payload): ValidatedJson<BlogRequest>,
) -> AppResult<Created<BlogResponse>> {
    if let Some(creator_id) = payload.creator_id {
        if session.users().find_by_id(creator_id).await?.is_none() {
            return Err(AppError::user_not_found(creator_id));
        }
    }

    let blog = session
        .blogs()
        .create(payload.title, payload.body, payload.creator_id)
        .await?;

    tracing::info!(blog_id = blog.id, "Blog created");

    Ok(Created(BlogResponse::from(blog)))
}

/// List all blog posts
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "Blogs",
    responses(
        (status = 200, description = "All blogs", body = Vec<BlogView>),
        (status = 404, description = "No blogs in database")
    )
)]
pub async fn list_blogs(
    Extension(session): Extension<DbSession>,
) -> AppResult<Json<Vec<BlogView>>> {
    let blogs = session.blogs().list().await?;

    // An empty table is reported as not found rather than an empty array
    if blogs.is_empty() {
        return Err(AppError::not_found("No blogs in database"));
    }

    Ok(Json(
        blogs
            .into_iter()
            .map(|(blog, creator)| BlogView::new(blog, creator))
            .collect(),
    ))
}

/// Get a blog post by ID
#[utoipa::path(
    get,
    path = "/blog/{id}",
    tag = "Blogs",
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog with its creator", body = BlogView),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn get_blog(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<Json<BlogView>> {
    let (blog, creator) = session
        .blogs()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::blog_not_found(id))?;

    Ok(Json(BlogView::new(blog, creator)))
}

/// Update a blog post's title and body
#[utoipa::path(
    put,
    path = "/blog/{id}",
    tag = "Blogs",
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    request_body = UpdateBlogRequest,
    responses(
        (status = 202, description = "Blog updated", body = MessageResponse),
        (status = 404, description = "Blog not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_blog(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBlogRequest>,
) -> AppResult<Accepted> {
    session
        .blogs()
        .update(id, payload.title, payload.body)
        .await?;

    Ok(Accepted(MessageResponse::new(format!(
        "Blog with ID {} updated",
        id
    ))))
}

/// Delete a blog post
#[utoipa::path(
    delete,
    path = "/blog/{id}",
    tag = "Blogs",
    params(
        ("id" = i32, Path, description = "Blog ID")
    ),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 404, description = "Blog not found")
    )
)]
pub async fn delete_blog(
    Extension(session): Extension<DbSession>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> AppResult<NoContent> {
    session.blogs().delete(id).await?;

    tracing::info!(blog_id = id, "Blog deleted");

    Ok(NoContent)
}
