//! Blog domain entity and its client-facing projections.

use serde::Serialize;
use utoipa::ToSchema;

use super::{User, UserView};

/// Blog domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub creator_id: Option<i32>,
}

/// Created blog (returned by `POST /blog`).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogResponse {
    /// Generated blog identifier
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "First post")]
    pub body: String,
    /// Author, when one was given
    pub creator_id: Option<i32>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            body: blog.body,
            creator_id: blog.creator_id,
        }
    }
}

/// Blog read projection with its creator nested as a reduced user view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BlogView {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Hello")]
    pub title: String,
    #[schema(example = "First post")]
    pub body: String,
    pub creator: Option<UserView>,
}

impl BlogView {
    pub fn new(blog: Blog, creator: Option<User>) -> Self {
        Self {
            id: blog.id,
            title: blog.title,
            body: blog.body,
            creator: creator.map(UserView::from),
        }
    }
}
