//! Domain layer - Core entities and the projections clients see.
//!
//! Nothing here touches the database; conversion from SeaORM models
//! lives next to the entity definitions in `infra`.

pub mod blog;
pub mod password;
pub mod user;

pub use blog::{Blog, BlogResponse, BlogView};
pub use password::Password;
pub use user::{User, UserResponse, UserView};
