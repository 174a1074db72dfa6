//! Repository layer - Data access abstraction
//!
//! Repositories borrow the transaction of a [`DbSession`](crate::infra::DbSession)
//! so every query in a request runs inside that request's session.

mod blog_repository;
pub(crate) mod entities;
mod user_repository;

pub use blog_repository::{BlogRepository, BlogWithCreator};
pub use user_repository::{UserFields, UserRepository};
