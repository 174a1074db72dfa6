//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and health check
//! - SeaORM entities and repositories
//! - Request-scoped database sessions

pub mod db;
pub mod repositories;
pub mod session;

pub use db::{Database, Migrator};
pub use repositories::{BlogRepository, BlogWithCreator, UserFields, UserRepository};
pub use session::DbSession;
