//! A single seeding worker.

use crate::config::{SeedOptions, TransactionScope};
use crate::metrics::{Outcome, WorkerOutcome};
use crate::partitioner::WorkerTask;
use crate::telemetry::ThroughputWindow;
use crate::writer::BatchWriter;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use seed_generator::RecordGenerator;
use seed_store::{Store, WriteError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};

/// Generates and inserts one task's share of records.
pub struct Worker {
    task: WorkerTask,
    generator: RecordGenerator,
    writer: BatchWriter,
    transaction_scope: TransactionScope,
    telemetry_interval: Duration,
}

impl Worker {
    pub fn new(
        task: WorkerTask,
        generator: RecordGenerator,
        store: Arc<dyn Store>,
        options: &SeedOptions,
    ) -> Self {
        let writer = BatchWriter::new(store, task.worker_id);
        Self {
            task,
            generator,
            writer,
            transaction_scope: options.transaction_scope(),
            telemetry_interval: options.telemetry_interval(),
        }
    }

    /// Run the task to completion.
    ///
    /// Store failures never escape: they are reported in the returned
    /// outcome.
    pub async fn run(self) -> WorkerOutcome {
        let started_at = Utc::now();
        let start = Instant::now();
        let worker_id = self.task.worker_id;

        info!(
            "Worker {} starting: {} records (seed={})",
            worker_id, self.task.record_count, self.task.seed
        );

        let outcome = match self.insert_all().await {
            Ok(records_inserted) => {
                info!(
                    "Worker {} inserted {} employees in total in {:.2}s",
                    worker_id,
                    records_inserted,
                    start.elapsed().as_secs_f64()
                );
                Outcome::Success { records_inserted }
            }
            Err((records_inserted, e)) => {
                error!("Worker {} encountered an error: {}", worker_id, e);
                Outcome::Failure {
                    records_inserted,
                    error: e.to_string(),
                }
            }
        };

        WorkerOutcome {
            worker_id,
            record_count: self.task.record_count,
            outcome,
            started_at,
            completed_at: Utc::now(),
        }
    }

    /// Insert the whole allocation, one transaction per batch.
    ///
    /// On failure returns the number of records committed by earlier batches
    /// together with the error.
    async fn insert_all(&self) -> Result<u64, (u64, WriteError)> {
        let mut rng = StdRng::seed_from_u64(self.task.seed);
        let mut telemetry = ThroughputWindow::new(self.task.worker_id, self.telemetry_interval);
        let batch_len = self.transaction_scope.batch_len(self.task.record_count);

        let mut committed = 0u64;
        let mut remaining = self.task.record_count;
        while remaining > 0 {
            let count = remaining.min(batch_len);
            let records = self.generator.records(&mut rng, count);
            let inserted = self
                .writer
                .write_batch(records, &mut telemetry)
                .await
                .map_err(|e| (committed, e))?;
            committed += inserted;
            remaining -= count;
        }

        Ok(committed)
    }
}
