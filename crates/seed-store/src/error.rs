//! Errors raised by store transactions.

use thiserror::Error;

/// Errors that can occur while writing records to a store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// A table constraint rejected the row.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The connection to the store was lost or could not be established.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store gave up waiting.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Any other store failure.
    #[error("Store error: {0}")]
    Store(String),
}
