//! CLI arguments shared by every `seed` target.

use super::settings::SeedSettings;
use chrono::{DateTime, Utc};
use clap::Args;
use seed_runner::TransactionScope;
use std::path::PathBuf;

/// Seeding arguments. Each flag overrides the matching field of the
/// optional `--config` file.
#[derive(Args, Clone, Debug, Default)]
pub struct SeedArgs {
    /// Path to a TOML settings file
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Total number of employee records to insert
    #[arg(long)]
    pub total_records: Option<u64>,

    /// Number of concurrent workers
    #[arg(long)]
    pub workers: Option<usize>,

    /// Maximum number of store connections (must be at least the worker count)
    #[arg(long)]
    pub pool_size: Option<usize>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Target table name
    #[arg(long)]
    pub table: Option<String>,

    /// Domain appended to generated email addresses
    #[arg(long)]
    pub email_domain: Option<String>,

    /// Valid job role ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub role_ids: Vec<i32>,

    /// Earliest employment date (RFC 3339, e.g. 2020-01-01T00:00:00Z)
    #[arg(long)]
    pub window_start: Option<DateTime<Utc>>,

    /// Latest employment or termination date (RFC 3339)
    #[arg(long)]
    pub window_end: Option<DateTime<Utc>>,

    /// Interval between per-worker progress lines (e.g. 500ms, 1s, 2m)
    #[arg(long)]
    pub telemetry_interval: Option<String>,

    /// Commit every N records instead of once per worker
    #[arg(long)]
    pub batch_size: Option<u64>,

    /// Drop and recreate the target table before seeding
    #[arg(long)]
    pub recreate_table: bool,

    /// Write the run summary as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report_json: Option<PathBuf>,
}

impl SeedArgs {
    /// Load the settings file (if any) and apply CLI overrides on top.
    pub fn load_settings(&self) -> anyhow::Result<SeedSettings> {
        let mut settings = match &self.config {
            Some(path) => SeedSettings::from_file(path)?,
            None => SeedSettings::default(),
        };
        self.apply_overrides(&mut settings);
        Ok(settings)
    }

    fn apply_overrides(&self, settings: &mut SeedSettings) {
        if let Some(total_records) = self.total_records {
            settings.total_records = total_records;
        }
        if let Some(workers) = self.workers {
            settings.worker_count = workers;
        }
        if let Some(pool_size) = self.pool_size {
            settings.pool_size = Some(pool_size);
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(table) = &self.table {
            settings.table_name = table.clone();
        }
        if let Some(domain) = &self.email_domain {
            settings.email_domain = domain.clone();
        }
        if !self.role_ids.is_empty() {
            settings.role_ids = self.role_ids.clone();
        }
        if let Some(start) = self.window_start {
            settings.window_start = start;
        }
        if let Some(end) = self.window_end {
            settings.window_end = end;
        }
        if let Some(interval) = &self.telemetry_interval {
            settings.telemetry_interval = interval.clone();
        }
        if let Some(size) = self.batch_size {
            settings.transaction_scope = TransactionScope::Batched { size };
        }
    }
}
