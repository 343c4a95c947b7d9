//! Main generator for producing employee records.

use crate::generators::{
    email_from_name, generate_full_name, generate_phone_number, generate_timestamp_between, pick,
};
use rand::Rng;
use seed_core::{EmpStatus, EmployeeRecord, Gender, GeneratorConfig};
use std::sync::Arc;

/// Generator that produces synthetic employee records.
///
/// The generator holds only immutable configuration, so one instance can be
/// cloned into every worker. All randomness comes from the RNG passed to
/// [`RecordGenerator::generate`].
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    config: Arc<GeneratorConfig>,
}

impl RecordGenerator {
    /// Create a generator from a validated configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate one record.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> EmployeeRecord {
        let emp_status_code = pick(rng, &EmpStatus::ALL);
        let gender = pick(rng, &Gender::ALL);
        let job_role_id = pick(rng, self.config.role_ids());

        let full_name = generate_full_name(rng);
        let phone_number = generate_phone_number(rng);
        let email_address = email_from_name(&full_name, self.config.email_domain());

        let window = self.config.window();
        let employment_date = generate_timestamp_between(rng, window.start(), window.end());
        let termination_date = if emp_status_code.has_termination_date() {
            Some(generate_timestamp_between(
                rng,
                employment_date,
                window.end(),
            ))
        } else {
            None
        };

        EmployeeRecord {
            full_name,
            phone_number,
            email_address,
            gender,
            job_role_id,
            employment_date,
            termination_date,
            emp_status_code,
        }
    }

    /// Lazily generate `count` records from the given RNG.
    pub fn records<'a, R: Rng>(
        &'a self,
        rng: &'a mut R,
        count: u64,
    ) -> RecordIterator<'a, R> {
        RecordIterator {
            generator: self,
            rng,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a, R: Rng> {
    generator: &'a RecordGenerator,
    rng: &'a mut R,
    remaining: u64,
}

impl<R: Rng> Iterator for RecordIterator<'_, R> {
    type Item = EmployeeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.generator.generate(&mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for RecordIterator<'_, R> {}
