//! API middleware.

mod session;

pub use session::db_session;
