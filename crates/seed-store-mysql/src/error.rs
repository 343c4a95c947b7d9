//! Error types for the MySQL store.

use seed_store::WriteError;
use thiserror::Error;

/// Errors that can occur while setting up or inspecting the MySQL store.
#[derive(Error, Debug)]
pub enum MySQLStoreError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// Invalid connection URL.
    #[error("Invalid MySQL connection string: {0}")]
    Url(#[from] mysql_async::UrlError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

// Server error codes that mean the row itself was rejected.
const ER_DUP_ENTRY: u16 = 1062;
const ER_BAD_NULL_ERROR: u16 = 1048;
const ER_NO_DEFAULT_FOR_FIELD: u16 = 1364;
const ER_DATA_TOO_LONG: u16 = 1406;
const ER_NO_REFERENCED_ROW_2: u16 = 1452;
const ER_CHECK_CONSTRAINT_VIOLATED: u16 = 3819;

const ER_LOCK_WAIT_TIMEOUT: u16 = 1205;
const ER_QUERY_TIMEOUT: u16 = 3024;

/// Classify a driver error raised inside a seeding transaction.
pub fn to_write_error(err: mysql_async::Error) -> WriteError {
    match &err {
        mysql_async::Error::Server(server) => match server.code {
            ER_DUP_ENTRY
            | ER_BAD_NULL_ERROR
            | ER_NO_DEFAULT_FOR_FIELD
            | ER_DATA_TOO_LONG
            | ER_NO_REFERENCED_ROW_2
            | ER_CHECK_CONSTRAINT_VIOLATED => WriteError::Constraint(err.to_string()),
            ER_LOCK_WAIT_TIMEOUT | ER_QUERY_TIMEOUT => WriteError::Timeout(err.to_string()),
            _ => WriteError::Store(err.to_string()),
        },
        mysql_async::Error::Io(_) | mysql_async::Error::Driver(_) => {
            WriteError::Connection(err.to_string())
        }
        _ => WriteError::Store(err.to_string()),
    }
}
