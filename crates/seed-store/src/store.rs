//! The store collaborator consumed by the seeding engine.

use crate::error::WriteError;
use async_trait::async_trait;
use seed_core::{EmployeeRecord, WorkerId};

/// A store that hands out independent transactions.
///
/// Implementations are shared by every worker of a run, so each call to
/// [`Store::begin_transaction`] must return a transaction with its own
/// connection. Stores that pool connections must be able to serve one open
/// transaction per worker at the same time.
#[async_trait]
pub trait Store: Send + Sync {
    /// Open a new transaction on behalf of `worker_id`.
    async fn begin_transaction(
        &self,
        worker_id: WorkerId,
    ) -> Result<Box<dyn StoreTransaction>, WriteError>;
}

/// An open transaction.
///
/// Inserts are issued sequentially. Dropping a transaction without calling
/// [`StoreTransaction::commit`] discards everything inserted into it.
#[async_trait]
pub trait StoreTransaction: Send {
    /// Insert one record inside the transaction.
    async fn insert(&mut self, record: &EmployeeRecord) -> Result<(), WriteError>;

    /// Commit all inserted records atomically.
    async fn commit(self: Box<Self>) -> Result<(), WriteError>;

    /// Discard all inserted records.
    async fn rollback(self: Box<Self>) -> Result<(), WriteError>;
}
