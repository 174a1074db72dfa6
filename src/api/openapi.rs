//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/openapi.json` and browsable at `/docs`.

use utoipa::OpenApi;

use crate::api::handlers::{blog_handler, user_handler};
use crate::domain::{BlogResponse, BlogView, UserResponse, UserView};
use crate::types::MessageResponse;

/// OpenAPI documentation for the blog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog API",
        version = "0.1.0",
        description = "Create, list, fetch, update and delete blog posts and users",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        blog_handler::create_blog,
        blog_handler::list_blogs,
        blog_handler::get_blog,
        blog_handler::update_blog,
        blog_handler::delete_blog,
        user_handler::create_user,
        user_handler::list_users,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            blog_handler::BlogRequest,
            blog_handler::UpdateBlogRequest,
            user_handler::UserRequest,
            BlogResponse,
            BlogView,
            UserResponse,
            UserView,
            MessageResponse,
        )
    ),
    tags(
        (name = "Blogs", description = "Blog post management"),
        (name = "Users", description = "User management")
    )
)]
pub struct ApiDoc;
