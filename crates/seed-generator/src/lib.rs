//! Synthetic employee record generator.
//!
//! This crate provides the [`RecordGenerator`], which produces internally
//! consistent [`EmployeeRecord`](seed_core::EmployeeRecord)s from a validated
//! [`GeneratorConfig`](seed_core::GeneratorConfig). The random source is
//! always passed in by the caller, so a seeded RNG gives reproducible output.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (roles, window, domain)
//!        │
//!        ▼
//! ┌───────────────────┐      ┌──────────────┐
//! │  RecordGenerator  │ ◄─── │ &mut impl Rng │
//! └─────────┬─────────┘      └──────────────┘
//!           │
//!           ▼
//!    EmployeeRecord { full_name, phone_number, email_address, ... }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seed_core::GeneratorConfig;
//! use seed_generator::RecordGenerator;
//!
//! let generator = RecordGenerator::new(GeneratorConfig::default());
//! let mut rng = StdRng::seed_from_u64(42);
//! let record = generator.generate(&mut rng);
//! assert!(record.email_address.ends_with("@company.com"));
//! ```

pub mod generator;
pub mod generators;

pub use generator::{RecordGenerator, RecordIterator};
