//! Shared application state.

/// Handed to every router; cloning only bumps the pool's reference count.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
