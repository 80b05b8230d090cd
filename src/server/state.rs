//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. It owns the store
//! connection explicitly; when startup could not connect, the connection is
//! absent and store-backed handlers answer with `AppError::StoreUnavailable`.

use sea_orm::DatabaseConnection;

use crate::server::error::AppError;

/// Application state containing shared resources and dependencies.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the store, `None` when the startup connection failed.
    db: Option<DatabaseConnection>,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Connection pool, or `None` to run without a store
    pub fn new(db: Option<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Returns the store connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The shared connection pool
    /// - `Err(AppError::StoreUnavailable)` - No connection was established at startup
    pub fn db(&self) -> Result<&DatabaseConnection, AppError> {
        self.db.as_ref().ok_or(AppError::StoreUnavailable)
    }
}
