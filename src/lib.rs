//! Blog API - a minimal blogging backend.
//!
//! HTTP endpoints to create, list, fetch, update and delete blog posts and
//! users, stored in SQLite through SeaORM. Passwords are hashed with Argon2
//! before they reach the database and are never returned to clients.
//!
//! # Layers
//!
//! - **cli** / **commands**: command-line entry points (`serve`, `migrate`)
//! - **config**: environment-driven settings and defaults
//! - **domain**: entities, the password value object, response projections
//! - **infra**: database, migrations, repositories, per-request sessions
//! - **api**: routes, handlers, middleware, extractors, OpenAPI
//! - **types**: response helpers
//! - **errors**: error type with HTTP conversion
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (creates tables on first run)
//! cargo run -- serve
//!
//! # Inspect migrations
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Blog, Password, User};
pub use errors::{AppError, AppResult};
pub use infra::{Database, DbSession};
