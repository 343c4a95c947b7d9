//! Parallel seeding engine.
//!
//! The [`Supervisor`] partitions the requested record count into one
//! [`WorkerTask`] per worker, runs every [`Worker`] on its own tokio task and
//! collects exactly one [`WorkerOutcome`] from each into a [`SeedingRun`].
//!
//! ```text
//! Supervisor ──(WorkerTask)──► Worker ──► RecordGenerator
//!     ▲                          │
//!     │                          ▼
//!     └──(WorkerOutcome)──── BatchWriter ──► Store transaction ──► commit
//! ```

pub mod config;
pub mod metrics;
pub mod partitioner;
pub mod report;
pub mod supervisor;
pub mod telemetry;
pub mod worker;
pub mod writer;

pub use config::{SeedOptions, TransactionScope, DEFAULT_TELEMETRY_INTERVAL};
pub use metrics::{Outcome, SeedingRun, WorkerOutcome};
pub use partitioner::{describe_partitioning, partition_work, WorkerTask};
pub use report::{format_summary, write_json_report};
pub use supervisor::Supervisor;
pub use telemetry::{ThroughputSample, ThroughputWindow};
pub use worker::Worker;
pub use writer::BatchWriter;
