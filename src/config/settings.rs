//! Seeding settings file and its validated form.

use super::duration::parse_duration;
use anyhow::Context;
use chrono::{DateTime, Utc};
use seed_core::{
    validate_table_name, ConfigError, DateWindow, GeneratorConfig, DEFAULT_EMAIL_DOMAIN,
    DEFAULT_TABLE_NAME,
};
use seed_runner::{SeedOptions, TransactionScope};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Connection slots used when no pool size is configured.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Raw settings as read from a TOML file. Every field is optional in the
/// file; missing fields take the defaults below.
///
/// ```toml
/// total_records = 1000000
/// worker_count = 4
/// pool_size = 10
/// seed = 42
/// table_name = "employees"
/// email_domain = "company.com"
/// role_ids = [1, 2, 3, 4, 5]
/// window_start = "2020-01-01T00:00:00Z"
/// window_end = "2024-06-30T00:00:00Z"
/// telemetry_interval = "1s"
/// transaction_scope = { mode = "batched", size = 10000 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedSettings {
    pub total_records: u64,
    pub worker_count: usize,
    /// Defaults to the larger of `worker_count` and [`DEFAULT_POOL_SIZE`].
    pub pool_size: Option<usize>,
    /// Base RNG seed. A random seed is drawn when absent.
    pub seed: Option<u64>,
    pub table_name: String,
    pub email_domain: String,
    pub role_ids: Vec<i32>,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub telemetry_interval: String,
    pub transaction_scope: TransactionScope,
}

impl Default for SeedSettings {
    fn default() -> Self {
        let window = DateWindow::default();
        Self {
            total_records: 1_000_000,
            worker_count: 4,
            pool_size: None,
            seed: None,
            table_name: DEFAULT_TABLE_NAME.to_string(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            role_ids: vec![1, 2, 3, 4, 5],
            window_start: window.start(),
            window_end: window.end(),
            telemetry_interval: "1s".to_string(),
            transaction_scope: TransactionScope::WholeAllocation,
        }
    }
}

impl SeedSettings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path:?}"))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config file: {path:?}"))
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the settings into a [`SeedConfig`].
    pub fn validate(&self) -> anyhow::Result<SeedConfig> {
        if self.worker_count == 0 {
            return Err(ConfigError::NoWorkers.into());
        }
        let pool_size = self
            .pool_size
            .unwrap_or_else(|| self.worker_count.max(DEFAULT_POOL_SIZE));
        if pool_size < self.worker_count {
            return Err(ConfigError::PoolTooSmall {
                pool_size,
                worker_count: self.worker_count,
            }
            .into());
        }
        validate_table_name(&self.table_name)?;

        let window = DateWindow::new(self.window_start, self.window_end)?;
        let generator = GeneratorConfig::new(self.role_ids.clone(), window, &self.email_domain)?;

        let telemetry_interval = parse_duration(&self.telemetry_interval)
            .with_context(|| format!("Invalid telemetry interval: {}", self.telemetry_interval))?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let options = SeedOptions::new(telemetry_interval, self.transaction_scope, seed)?;

        Ok(SeedConfig {
            total_records: self.total_records,
            worker_count: self.worker_count,
            pool_size,
            table_name: self.table_name.clone(),
            generator,
            options,
        })
    }
}

/// Validated configuration for one seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedConfig {
    total_records: u64,
    worker_count: usize,
    pool_size: usize,
    table_name: String,
    generator: GeneratorConfig,
    options: SeedOptions,
}

impl SeedConfig {
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    pub fn options(&self) -> &SeedOptions {
        &self.options
    }
}
