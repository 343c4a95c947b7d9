//! Plan command: show how a run would be partitioned without touching a store.

use clap::Args;
use seed_core::ConfigError;
use seed_runner::{describe_partitioning, partition_work};

#[derive(Args, Clone, Debug)]
pub struct PlanArgs {
    /// Total number of employee records
    #[arg(long, default_value = "1000000")]
    pub total_records: u64,

    /// Number of concurrent workers
    #[arg(long, default_value = "4")]
    pub workers: usize,

    /// Base random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

/// Render the partitioning for `args`.
pub fn run_plan(args: &PlanArgs) -> anyhow::Result<String> {
    if args.workers == 0 {
        return Err(ConfigError::NoWorkers.into());
    }
    let tasks = partition_work(args.total_records, args.workers, args.seed);
    Ok(describe_partitioning(&tasks))
}
