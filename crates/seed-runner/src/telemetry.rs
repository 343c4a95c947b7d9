//! Rolling throughput window for one worker.
//!
//! The window counts inserts and, once the configured interval has passed
//! since the last emission, emits a sample and starts over. Samples are
//! reported as tracing events and never block the worker.

use seed_core::WorkerId;
use std::time::{Duration, Instant};
use tracing::info;

/// Records inserted by one worker during one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputSample {
    pub worker_id: WorkerId,
    pub records: u64,
    /// Actual length of the window, at least the configured interval.
    pub elapsed: Duration,
}

impl ThroughputSample {
    pub fn records_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.records as f64 / secs
        } else {
            0.0
        }
    }
}

#[derive(Debug)]
pub struct ThroughputWindow {
    worker_id: WorkerId,
    interval: Duration,
    window_start: Instant,
    records: u64,
    samples_emitted: u64,
}

impl ThroughputWindow {
    /// Start a window now.
    pub fn new(worker_id: WorkerId, interval: Duration) -> Self {
        Self::starting_at(worker_id, interval, Instant::now())
    }

    pub fn starting_at(worker_id: WorkerId, interval: Duration, start: Instant) -> Self {
        Self {
            worker_id,
            interval,
            window_start: start,
            records: 0,
            samples_emitted: 0,
        }
    }

    /// Count one insert and log a sample if the window has elapsed.
    pub fn record_insert(&mut self) -> Option<ThroughputSample> {
        let sample = self.record_insert_at(Instant::now());
        if let Some(sample) = &sample {
            info!(
                worker_id = sample.worker_id,
                records = sample.records,
                "Worker {} inserted {} records in the last {} ms",
                sample.worker_id,
                sample.records,
                sample.elapsed.as_millis()
            );
        }
        sample
    }

    /// Count one insert observed at `now`.
    pub fn record_insert_at(&mut self, now: Instant) -> Option<ThroughputSample> {
        self.records += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let sample = ThroughputSample {
            worker_id: self.worker_id,
            records: self.records,
            elapsed,
        };
        self.records = 0;
        self.window_start = now;
        self.samples_emitted += 1;
        Some(sample)
    }

    /// Inserts counted since the last emission.
    pub fn pending(&self) -> u64 {
        self.records
    }

    pub fn samples_emitted(&self) -> u64 {
        self.samples_emitted
    }
}
