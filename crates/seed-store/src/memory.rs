//! In-memory store used for dry runs and tests.
//!
//! Committed rows are kept in a vector guarded by a tokio mutex. Inserts are
//! staged inside the transaction and only become visible on commit, so a
//! rolled back or dropped transaction leaves no trace. Faults and latency can
//! be injected per worker.

use crate::error::WriteError;
use crate::store::{Store, StoreTransaction};
use async_trait::async_trait;
use seed_core::{EmployeeRecord, WorkerId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// A committed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEmployee {
    /// Auto-increment id assigned at commit.
    pub id: u64,
    /// Worker whose transaction committed the row.
    pub worker_id: WorkerId,
    pub record: EmployeeRecord,
}

#[derive(Debug, Default)]
struct FaultPlan {
    /// Fail when the worker's n-th insert (1-based, counted across all its
    /// transactions) is attempted.
    insert: HashMap<WorkerId, (u64, WriteError)>,
    begin: HashMap<WorkerId, WriteError>,
    commit: HashMap<WorkerId, WriteError>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Mutex<Vec<StoredEmployee>>,
    next_id: AtomicU64,
    attempted_inserts: Mutex<HashMap<WorkerId, u64>>,
    faults: FaultPlan,
    insert_delay: Option<Duration>,
    open_transactions: AtomicUsize,
    peak_open_transactions: AtomicUsize,
    commits: AtomicU64,
    rollbacks: AtomicU64,
}

/// In-memory [`Store`].
///
/// Cloning is cheap and every clone sees the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the `nth` insert attempted by `worker_id` fail with `error`.
    ///
    /// Must be called before the store is shared.
    pub fn fail_insert(mut self, worker_id: WorkerId, nth: u64, error: WriteError) -> Self {
        self.inner_mut().faults.insert.insert(worker_id, (nth, error));
        self
    }

    /// Make every transaction opened by `worker_id` fail to begin.
    pub fn fail_begin(mut self, worker_id: WorkerId, error: WriteError) -> Self {
        self.inner_mut().faults.begin.insert(worker_id, error);
        self
    }

    /// Make every commit attempted by `worker_id` fail.
    pub fn fail_commit(mut self, worker_id: WorkerId, error: WriteError) -> Self {
        self.inner_mut().faults.commit.insert(worker_id, error);
        self
    }

    /// Sleep for `delay` before each insert completes.
    pub fn with_insert_delay(mut self, delay: Duration) -> Self {
        self.inner_mut().insert_delay = Some(delay);
        self
    }

    fn inner_mut(&mut self) -> &mut Inner {
        Arc::get_mut(&mut self.inner).expect("MemoryStore configured after being shared")
    }

    /// Number of committed rows.
    pub async fn row_count(&self) -> u64 {
        self.inner.rows.lock().await.len() as u64
    }

    /// Snapshot of all committed rows, in commit order.
    pub async fn rows(&self) -> Vec<StoredEmployee> {
        self.inner.rows.lock().await.clone()
    }

    /// Number of committed rows written by `worker_id`.
    pub async fn rows_for_worker(&self, worker_id: WorkerId) -> u64 {
        self.inner
            .rows
            .lock()
            .await
            .iter()
            .filter(|row| row.worker_id == worker_id)
            .count() as u64
    }

    pub fn commit_count(&self) -> u64 {
        self.inner.commits.load(Ordering::SeqCst)
    }

    /// Number of transactions that ended without committing, whether
    /// rolled back explicitly or dropped.
    pub fn rollback_count(&self) -> u64 {
        self.inner.rollbacks.load(Ordering::SeqCst)
    }

    pub fn open_transactions(&self) -> usize {
        self.inner.open_transactions.load(Ordering::SeqCst)
    }

    /// Highest number of transactions that were open at the same time.
    pub fn peak_open_transactions(&self) -> usize {
        self.inner.peak_open_transactions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin_transaction(
        &self,
        worker_id: WorkerId,
    ) -> Result<Box<dyn StoreTransaction>, WriteError> {
        if let Some(error) = self.inner.faults.begin.get(&worker_id) {
            return Err(error.clone());
        }

        let open = self.inner.open_transactions.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner
            .peak_open_transactions
            .fetch_max(open, Ordering::SeqCst);
        debug!("Worker {} opened in-memory transaction", worker_id);

        Ok(Box::new(MemoryTransaction {
            inner: Arc::clone(&self.inner),
            worker_id,
            staged: Vec::new(),
            finished: false,
        }))
    }
}

struct MemoryTransaction {
    inner: Arc<Inner>,
    worker_id: WorkerId,
    staged: Vec<EmployeeRecord>,
    finished: bool,
}

impl MemoryTransaction {
    fn finish(&mut self, committed: bool) {
        if self.finished {
            return;
        }
        self.finished = true;
        self.inner.open_transactions.fetch_sub(1, Ordering::SeqCst);
        if committed {
            self.inner.commits.fetch_add(1, Ordering::SeqCst);
        } else {
            self.inner.rollbacks.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[async_trait]
impl StoreTransaction for MemoryTransaction {
    async fn insert(&mut self, record: &EmployeeRecord) -> Result<(), WriteError> {
        if let Some(delay) = self.inner.insert_delay {
            tokio::time::sleep(delay).await;
        }

        let attempt = {
            let mut attempts = self.inner.attempted_inserts.lock().await;
            let counter = attempts.entry(self.worker_id).or_insert(0);
            *counter += 1;
            *counter
        };
        if let Some((nth, error)) = self.inner.faults.insert.get(&self.worker_id) {
            if attempt == *nth {
                return Err(error.clone());
            }
        }

        self.staged.push(record.clone());
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), WriteError> {
        let mut tx = self;
        if let Some(error) = tx.inner.faults.commit.get(&tx.worker_id) {
            let error = error.clone();
            tx.finish(false);
            return Err(error);
        }

        let staged = std::mem::take(&mut tx.staged);
        {
            let mut rows = tx.inner.rows.lock().await;
            for record in staged {
                let id = tx.inner.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                rows.push(StoredEmployee {
                    id,
                    worker_id: tx.worker_id,
                    record,
                });
            }
        }
        tx.finish(true);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), WriteError> {
        let mut tx = self;
        tx.staged.clear();
        tx.finish(false);
        Ok(())
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        self.finish(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use seed_core::{EmpStatus, Gender};

    fn record(n: u32) -> EmployeeRecord {
        EmployeeRecord {
            full_name: format!("Employee {n}"),
            phone_number: "5550000000".to_string(),
            email_address: format!("Employee{n}@company.com"),
            gender: Gender::Male,
            job_role_id: 1,
            employment_date: Utc::now(),
            termination_date: None,
            emp_status_code: EmpStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_rows_visible_only_after_commit() {
        let store = MemoryStore::new();
        let mut tx = store.begin_transaction(1).await.unwrap();
        tx.insert(&record(1)).await.unwrap();
        tx.insert(&record(2)).await.unwrap();
        assert_eq!(store.row_count().await, 0);

        tx.commit().await.unwrap();
        assert_eq!(store.row_count().await, 2);
        assert_eq!(store.commit_count(), 1);
        assert_eq!(store.open_transactions(), 0);

        let rows = store.rows().await;
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[1].record.full_name, "Employee 2");
    }

    #[tokio::test]
    async fn test_rollback_discards_rows() {
        let store = MemoryStore::new();
        let mut tx = store.begin_transaction(1).await.unwrap();
        tx.insert(&record(1)).await.unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(store.row_count().await, 0);
        assert_eq!(store.rollback_count(), 1);
        assert_eq!(store.open_transactions(), 0);
    }

    #[tokio::test]
    async fn test_dropped_transaction_rolls_back() {
        let store = MemoryStore::new();
        {
            let mut tx = store.begin_transaction(3).await.unwrap();
            tx.insert(&record(1)).await.unwrap();
            assert_eq!(store.open_transactions(), 1);
        }
        assert_eq!(store.row_count().await, 0);
        assert_eq!(store.rollback_count(), 1);
        assert_eq!(store.open_transactions(), 0);
    }

    #[tokio::test]
    async fn test_injected_faults() {
        let store = MemoryStore::new()
            .fail_insert(1, 2, WriteError::Constraint("duplicate".into()))
            .fail_begin(2, WriteError::Connection("refused".into()))
            .fail_commit(3, WriteError::Timeout("commit".into()));

        let mut tx = store.begin_transaction(1).await.unwrap();
        tx.insert(&record(1)).await.unwrap();
        assert_eq!(
            tx.insert(&record(2)).await,
            Err(WriteError::Constraint("duplicate".into()))
        );
        drop(tx);

        assert!(matches!(
            store.begin_transaction(2).await,
            Err(WriteError::Connection(_))
        ));

        let mut tx = store.begin_transaction(3).await.unwrap();
        tx.insert(&record(3)).await.unwrap();
        assert_eq!(
            tx.commit().await,
            Err(WriteError::Timeout("commit".into()))
        );

        assert_eq!(store.row_count().await, 0);
        assert_eq!(store.open_transactions(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_rows() {
        let store = MemoryStore::new();
        let clone = store.clone();
        let mut tx = clone.begin_transaction(4).await.unwrap();
        tx.insert(&record(1)).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(store.rows_for_worker(4).await, 1);
        assert_eq!(store.rows_for_worker(5).await, 0);
    }
}
