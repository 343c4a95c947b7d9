//! Transactional batch writer.

use crate::telemetry::ThroughputWindow;
use seed_core::{EmployeeRecord, WorkerId};
use seed_store::{Store, WriteError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Writes batches of records, each inside one store transaction.
#[derive(Clone)]
pub struct BatchWriter {
    store: Arc<dyn Store>,
    worker_id: WorkerId,
}

impl BatchWriter {
    pub fn new(store: Arc<dyn Store>, worker_id: WorkerId) -> Self {
        Self { store, worker_id }
    }

    /// Insert every record in one transaction and commit.
    ///
    /// Inserts run sequentially in iteration order. The first failing insert
    /// rolls the transaction back and no further records are consumed.
    /// Returns the number of committed records.
    pub async fn write_batch<I>(
        &self,
        records: I,
        telemetry: &mut ThroughputWindow,
    ) -> Result<u64, WriteError>
    where
        I: IntoIterator<Item = EmployeeRecord>,
        I::IntoIter: Send,
    {
        let mut tx = self.store.begin_transaction(self.worker_id).await?;
        let mut inserted = 0u64;

        for record in records {
            if let Err(e) = tx.insert(&record).await {
                debug!(
                    "Worker {} rolling back after {} inserts: {}",
                    self.worker_id, inserted, e
                );
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(
                        "Worker {} failed to roll back transaction: {}",
                        self.worker_id, rollback_err
                    );
                }
                return Err(e);
            }
            inserted += 1;
            telemetry.record_insert();
        }

        tx.commit().await?;
        debug!("Worker {} committed {} records", self.worker_id, inserted);
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seed_core::GeneratorConfig;
    use seed_generator::RecordGenerator;
    use seed_store::MemoryStore;
    use std::time::Duration;

    fn records(count: u64) -> Vec<EmployeeRecord> {
        let generator = RecordGenerator::new(GeneratorConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        generator.records(&mut rng, count).collect()
    }

    fn telemetry() -> ThroughputWindow {
        ThroughputWindow::new(1, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn test_write_batch_commits_all_records() {
        let store = MemoryStore::new();
        let writer = BatchWriter::new(Arc::new(store.clone()), 1);
        let batch = records(25);

        let inserted = writer
            .write_batch(batch.clone(), &mut telemetry())
            .await
            .unwrap();

        assert_eq!(inserted, 25);
        assert_eq!(store.commit_count(), 1);
        let stored: Vec<_> = store.rows().await.into_iter().map(|r| r.record).collect();
        assert_eq!(stored, batch, "rows must keep generation order");
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back_whole_batch() {
        let store =
            MemoryStore::new().fail_insert(1, 7, WriteError::Constraint("duplicate".into()));
        let writer = BatchWriter::new(Arc::new(store.clone()), 1);

        let result = writer.write_batch(records(10), &mut telemetry()).await;

        assert_eq!(result, Err(WriteError::Constraint("duplicate".into())));
        assert_eq!(store.row_count().await, 0);
        assert_eq!(store.rollback_count(), 1);
        assert_eq!(store.open_transactions(), 0);
    }

    #[tokio::test]
    async fn test_no_inserts_after_failure() {
        let store = MemoryStore::new().fail_insert(1, 3, WriteError::Store("bad row".into()));
        let writer = BatchWriter::new(Arc::new(store.clone()), 1);

        let mut consumed = 0;
        let batch = records(10).into_iter().inspect(|_| consumed += 1);
        let result = writer.write_batch(batch, &mut telemetry()).await;

        assert!(result.is_err());
        assert_eq!(consumed, 3);
    }

    #[tokio::test]
    async fn test_commit_failure_is_reported() {
        let store = MemoryStore::new().fail_commit(1, WriteError::Timeout("commit".into()));
        let writer = BatchWriter::new(Arc::new(store.clone()), 1);

        let result = writer.write_batch(records(5), &mut telemetry()).await;

        assert_eq!(result, Err(WriteError::Timeout("commit".into())));
        assert_eq!(store.row_count().await, 0);
    }

    #[tokio::test]
    async fn test_begin_failure_is_reported() {
        let store = MemoryStore::new().fail_begin(1, WriteError::Connection("refused".into()));
        let writer = BatchWriter::new(Arc::new(store.clone()), 1);

        let result = writer.write_batch(records(5), &mut telemetry()).await;

        assert_eq!(result, Err(WriteError::Connection("refused".into())));
    }

    #[tokio::test]
    async fn test_telemetry_counts_inserts() {
        let store = MemoryStore::new();
        let writer = BatchWriter::new(Arc::new(store), 1);
        let mut window = ThroughputWindow::new(1, Duration::from_secs(3600));

        writer.write_batch(records(12), &mut window).await.unwrap();

        assert_eq!(window.pending(), 12);
        assert_eq!(window.samples_emitted(), 0);
    }
}
