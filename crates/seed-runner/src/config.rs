//! Run options shared by every worker.

use seed_core::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default interval between throughput samples.
pub const DEFAULT_TELEMETRY_INTERVAL: Duration = Duration::from_millis(1000);

/// How much of a worker's allocation one transaction covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TransactionScope {
    /// The whole allocation commits or rolls back as one unit.
    WholeAllocation,
    /// Each run of `size` records is its own transaction. A failure rolls
    /// back only the current batch; earlier batches stay committed.
    Batched { size: u64 },
}

impl TransactionScope {
    /// Number of records per transaction for an allocation of `record_count`.
    pub fn batch_len(&self, record_count: u64) -> u64 {
        match self {
            TransactionScope::WholeAllocation => record_count,
            TransactionScope::Batched { size } => *size,
        }
    }
}

/// Options applied to every worker of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOptions {
    telemetry_interval: Duration,
    transaction_scope: TransactionScope,
    seed: u64,
}

impl SeedOptions {
    pub fn new(
        telemetry_interval: Duration,
        transaction_scope: TransactionScope,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if telemetry_interval.is_zero() {
            return Err(ConfigError::ZeroTelemetryInterval);
        }
        if transaction_scope == (TransactionScope::Batched { size: 0 }) {
            return Err(ConfigError::ZeroBatchSize);
        }
        Ok(Self {
            telemetry_interval,
            transaction_scope,
            seed,
        })
    }

    pub fn telemetry_interval(&self) -> Duration {
        self.telemetry_interval
    }

    pub fn transaction_scope(&self) -> TransactionScope {
        self.transaction_scope
    }

    /// Base seed. Worker `n` seeds its RNG with `seed + n`.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            telemetry_interval: DEFAULT_TELEMETRY_INTERVAL,
            transaction_scope: TransactionScope::WholeAllocation,
            seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert_eq!(
            SeedOptions::new(Duration::ZERO, TransactionScope::WholeAllocation, 1),
            Err(ConfigError::ZeroTelemetryInterval)
        );
        assert_eq!(
            SeedOptions::new(
                DEFAULT_TELEMETRY_INTERVAL,
                TransactionScope::Batched { size: 0 },
                1
            ),
            Err(ConfigError::ZeroBatchSize)
        );

        let options = SeedOptions::new(
            Duration::from_millis(250),
            TransactionScope::Batched { size: 500 },
            7,
        )
        .unwrap();
        assert_eq!(options.telemetry_interval(), Duration::from_millis(250));
        assert_eq!(options.seed(), 7);
    }

    #[test]
    fn test_batch_len() {
        assert_eq!(TransactionScope::WholeAllocation.batch_len(250_000), 250_000);
        assert_eq!(TransactionScope::Batched { size: 1000 }.batch_len(250_000), 1000);
    }
}
