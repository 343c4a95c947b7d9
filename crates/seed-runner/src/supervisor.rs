//! Supervisor: partitions work, runs the worker pool and aggregates outcomes.

use crate::config::SeedOptions;
use crate::metrics::{SeedingRun, WorkerOutcome};
use crate::partitioner::{describe_partitioning, partition_work, WorkerTask};
use crate::worker::Worker;
use chrono::Utc;
use seed_generator::RecordGenerator;
use seed_store::Store;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Coordinates one seeding run.
pub struct Supervisor {
    store: Arc<dyn Store>,
    generator: RecordGenerator,
    options: SeedOptions,
}

impl Supervisor {
    pub fn new(store: Arc<dyn Store>, generator: RecordGenerator, options: SeedOptions) -> Self {
        Self {
            store,
            generator,
            options,
        }
    }

    /// Seed `total_records` records using `worker_count` concurrent workers.
    ///
    /// Every worker runs on its own tokio task. The call returns only after
    /// all of them have reported, whether they succeeded or failed, and the
    /// run always holds exactly `worker_count` outcomes.
    pub async fn seed(&self, total_records: u64, worker_count: usize) -> SeedingRun {
        let tasks = partition_work(total_records, worker_count, self.options.seed());
        info!(
            "Seeding {} records with {} workers",
            total_records, worker_count
        );
        info!("{}", describe_partitioning(&tasks));

        let started_at = Utc::now();
        let start = Instant::now();

        let handles: Vec<(WorkerTask, JoinHandle<WorkerOutcome>)> = tasks
            .into_iter()
            .map(|task| {
                let worker = Worker::new(
                    task.clone(),
                    self.generator.clone(),
                    Arc::clone(&self.store),
                    &self.options,
                );
                (task, tokio::spawn(worker.run()))
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (task, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    error!("Worker {} did not finish: {}", task.worker_id, join_err);
                    WorkerOutcome::fault(&task, started_at, format!("worker fault: {join_err}"))
                }
            };

            if outcome.success() {
                info!("Worker {} completed successfully", outcome.worker_id);
            } else {
                error!(
                    "Worker {} failed: {}",
                    outcome.worker_id,
                    outcome.error().unwrap_or("unknown error")
                );
            }
            outcomes.push(outcome);
        }
        outcomes.sort_by_key(|o| o.worker_id);

        let elapsed_ms = start.elapsed().as_millis() as u64;
        info!(
            "Total time taken for the entire seeding process: {} ms",
            elapsed_ms
        );

        SeedingRun {
            total_records,
            worker_count,
            seed: self.options.seed(),
            outcomes,
            started_at,
            completed_at: Utc::now(),
            elapsed_ms,
        }
    }
}
