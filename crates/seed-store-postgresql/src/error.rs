//! Error types for the PostgreSQL store.

use seed_store::WriteError;
use thiserror::Error;
use tokio_postgres::error::SqlState;

/// Errors that can occur while setting up or inspecting the PostgreSQL store.
#[derive(Error, Debug)]
pub enum PostgreSQLStoreError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Classify a driver error raised inside a seeding transaction.
pub fn to_write_error(err: tokio_postgres::Error) -> WriteError {
    let message = err
        .as_db_error()
        .map(|db| db.to_string())
        .unwrap_or_else(|| err.to_string());

    if let Some(state) = err.code() {
        if *state == SqlState::QUERY_CANCELED || *state == SqlState::LOCK_NOT_AVAILABLE {
            return WriteError::Timeout(message);
        }
        // Class 23: integrity constraint violation
        if state.code().starts_with("23") {
            return WriteError::Constraint(message);
        }
        // Class 08: connection exception
        if state.code().starts_with("08") {
            return WriteError::Connection(message);
        }
    }

    if err.is_closed() {
        return WriteError::Connection(message);
    }

    WriteError::Store(message)
}
