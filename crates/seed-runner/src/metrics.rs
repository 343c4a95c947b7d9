//! Worker outcomes and the aggregated seeding run.

use crate::partitioner::WorkerTask;
use chrono::{DateTime, Utc};
use seed_core::WorkerId;
use serde::{Deserialize, Serialize};

/// Terminal result of one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Every assigned record was committed.
    Success { records_inserted: u64 },
    /// The worker stopped early. `records_inserted` counts rows committed
    /// before the failure.
    Failure {
        records_inserted: u64,
        error: String,
    },
}

/// Outcome reported by a worker to the supervisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerOutcome {
    pub worker_id: WorkerId,
    /// Records assigned to the worker.
    pub record_count: u64,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl WorkerOutcome {
    /// Outcome for a worker whose task ended without reporting, e.g. a panic.
    pub fn fault(task: &WorkerTask, started_at: DateTime<Utc>, error: impl Into<String>) -> Self {
        Self {
            worker_id: task.worker_id,
            record_count: task.record_count,
            outcome: Outcome::Failure {
                records_inserted: 0,
                error: error.into(),
            },
            started_at,
            completed_at: Utc::now(),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    pub fn records_inserted(&self) -> u64 {
        match self.outcome {
            Outcome::Success { records_inserted } | Outcome::Failure { records_inserted, .. } => {
                records_inserted
            }
        }
    }

    /// Error message, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    /// Get duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.completed_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    pub fn rows_per_second(&self) -> Option<f64> {
        let secs = self.duration_secs();
        if secs > 0.0 {
            Some(self.records_inserted() as f64 / secs)
        } else {
            None
        }
    }
}

/// Aggregate of one seeding invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedingRun {
    /// Total records requested.
    pub total_records: u64,
    pub worker_count: usize,
    /// Base RNG seed of the run.
    pub seed: u64,
    /// One outcome per worker, ordered by worker id.
    pub outcomes: Vec<WorkerOutcome>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    /// Wall clock time from dispatch until every outcome was collected.
    pub elapsed_ms: u64,
}

impl SeedingRun {
    pub fn total_inserted(&self) -> u64 {
        self.outcomes.iter().map(|o| o.records_inserted()).sum()
    }

    /// True iff every worker succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.success())
    }

    pub fn succeeded_workers(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success()).count()
    }

    pub fn failed_workers(&self) -> usize {
        self.outcomes.len() - self.succeeded_workers()
    }

    pub fn failures(&self) -> impl Iterator<Item = &WorkerOutcome> {
        self.outcomes.iter().filter(|o| !o.success())
    }

    /// Records assigned to failed workers that were not committed.
    pub fn lost_records(&self) -> u64 {
        self.failures()
            .map(|o| o.record_count.saturating_sub(o.records_inserted()))
            .sum()
    }

    /// Process exit code: 0 if every worker succeeded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    pub fn rows_per_second(&self) -> f64 {
        if self.elapsed_ms > 0 {
            self.total_inserted() as f64 / (self.elapsed_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}
