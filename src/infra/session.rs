//! Per-request database session.
//!
//! A [`DbSession`] owns one database transaction for the lifetime of a
//! request. The `db_session` middleware opens it before dispatch and calls
//! [`DbSession::close`] once the handler has produced a response:
//!
//! - success responses commit,
//! - every other outcome rolls back.
//!
//! If a clone of the session outlives the request, dropping the last clone
//! rolls the transaction back, so the connection is always returned.

use std::sync::Arc;

use sea_orm::{DatabaseTransaction, DbErr};

use super::repositories::{BlogRepository, UserRepository};

/// Request-scoped handle to a database transaction.
#[derive(Clone)]
pub struct DbSession {
    txn: Arc<DatabaseTransaction>,
}

impl DbSession {
    pub(crate) fn new(txn: DatabaseTransaction) -> Self {
        tracing::debug!("Database session opened");
        Self { txn: Arc::new(txn) }
    }

    /// Blog repository for this session
    pub fn blogs(&self) -> BlogRepository<'_> {
        BlogRepository::new(&self.txn)
    }

    /// User repository for this session
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.txn)
    }

    /// End the session, committing when `commit` is true.
    pub async fn close(self, commit: bool) -> Result<(), DbErr> {
        let txn = match Arc::try_unwrap(self.txn) {
            Ok(txn) => txn,
            Err(_) => {
                tracing::warn!("Database session still shared at close; rolling back on drop");
                return Ok(());
            }
        };

        if commit {
            txn.commit().await?;
            tracing::debug!("Database session committed");
        } else {
            txn.rollback().await?;
            tracing::debug!("Database session rolled back");
        }

        Ok(())
    }
}
