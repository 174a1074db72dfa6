//! HTTP request handlers.

pub mod blog_handler;
pub mod user_handler;

pub use blog_handler::blog_routes;
pub use user_handler::user_routes;
