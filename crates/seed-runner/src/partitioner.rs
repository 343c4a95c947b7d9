//! Work partitioning across the worker pool.
//!
//! Every worker receives `ceil(total / workers)` records until the total runs
//! out. The last worker with work absorbs the remainder and any workers after
//! it receive zero records, so exactly `worker_count` tasks are always
//! produced and their sizes always sum to `total`.

use seed_core::WorkerId;
use serde::{Deserialize, Serialize};

/// A unit of work assigned to one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerTask {
    /// Worker id, starting at 1.
    pub worker_id: WorkerId,
    /// Number of records this worker generates and inserts.
    pub record_count: u64,
    /// Seed for the worker's RNG.
    pub seed: u64,
}

/// Partition `total_records` across `worker_count` workers.
///
/// Worker `n` seeds its RNG with `base_seed + n`, so the same arguments
/// always produce the same tasks.
pub fn partition_work(total_records: u64, worker_count: usize, base_seed: u64) -> Vec<WorkerTask> {
    if worker_count == 0 {
        return Vec::new();
    }

    let per_worker = total_records.div_ceil(worker_count as u64);
    let mut remaining = total_records;

    (1..=worker_count as WorkerId)
        .map(|worker_id| {
            let record_count = per_worker.min(remaining);
            remaining -= record_count;
            WorkerTask {
                worker_id,
                record_count,
                seed: base_seed.wrapping_add(u64::from(worker_id)),
            }
        })
        .collect()
}

/// Describe the partitioning plan for logging.
pub fn describe_partitioning(tasks: &[WorkerTask]) -> String {
    let mut lines = Vec::new();
    lines.push("Work distribution:".to_string());

    for task in tasks {
        let records = if task.record_count == 0 {
            "0 records (idle)".to_string()
        } else {
            format!("{} records", task.record_count)
        };
        lines.push(format!(
            "  worker-{}: {} (seed={})",
            task.worker_id, records, task.seed
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(tasks: &[WorkerTask]) -> Vec<u64> {
        tasks.iter().map(|t| t.record_count).collect()
    }

    #[test]
    fn test_partition_with_remainder() {
        let tasks = partition_work(10, 4, 0);
        assert_eq!(sizes(&tasks), vec![3, 3, 3, 1]);
        assert_eq!(tasks.iter().map(|t| t.record_count).sum::<u64>(), 10);
    }

    #[test]
    fn test_partition_equal_distribution() {
        let tasks = partition_work(1_000_000, 4, 42);
        assert_eq!(sizes(&tasks), vec![250_000; 4]);

        // Check ids and seeds
        assert_eq!(
            tasks.iter().map(|t| t.worker_id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4]
        );
        assert_eq!(
            tasks.iter().map(|t| t.seed).collect::<Vec<_>>(),
            vec![43, 44, 45, 46]
        );
    }

    #[test]
    fn test_partition_fewer_records_than_workers() {
        let tasks = partition_work(2, 4, 0);
        assert_eq!(tasks.len(), 4);
        assert_eq!(sizes(&tasks), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_partition_never_oversubscribes() {
        // ceil(9 / 6) = 2, so the first four workers take all nine records
        // and the rest receive nothing.
        let tasks = partition_work(9, 6, 0);
        assert_eq!(sizes(&tasks), vec![2, 2, 2, 2, 1, 0]);

        for total in 0..50u64 {
            for workers in 1..10usize {
                let tasks = partition_work(total, workers, 0);
                assert_eq!(tasks.len(), workers);
                assert_eq!(tasks.iter().map(|t| t.record_count).sum::<u64>(), total);
            }
        }
    }

    #[test]
    fn test_partition_zero_records() {
        let tasks = partition_work(0, 3, 0);
        assert_eq!(sizes(&tasks), vec![0, 0, 0]);
    }

    #[test]
    fn test_partition_zero_workers() {
        assert!(partition_work(100, 0, 0).is_empty());
    }

    #[test]
    fn test_partition_is_deterministic() {
        assert_eq!(partition_work(12_345, 7, 99), partition_work(12_345, 7, 99));
    }

    #[test]
    fn test_seed_wraps() {
        let tasks = partition_work(2, 2, u64::MAX);
        assert_eq!(tasks[0].seed, 0);
        assert_eq!(tasks[1].seed, 1);
    }

    #[test]
    fn test_describe_partitioning() {
        let tasks = partition_work(2, 3, 42);
        let description = describe_partitioning(&tasks);
        assert!(description.contains("worker-1: 1 records (seed=43)"));
        assert!(description.contains("worker-3: 0 records (idle)"));
    }
}
