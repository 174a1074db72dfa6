//! Application state shared by every handler.

use std::sync::Arc;

use crate::infra::Database;

/// Application state.
///
/// Handlers never query through the shared connection directly; blog and
/// user routes receive a per-request [`DbSession`](crate::infra::DbSession)
/// from the session middleware instead.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub database: Arc<Database>,
}

impl AppState {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }
}
