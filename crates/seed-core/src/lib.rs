//! Core types for the employee-seed bulk loader.
//!
//! This crate provides the types shared by every other crate in the
//! workspace:
//!
//! - [`EmployeeRecord`] - One synthetic employee row
//! - [`EmpStatus`] / [`Gender`] - Enumerated record fields
//! - [`DateWindow`] - Historical window employment dates are drawn from
//! - [`GeneratorConfig`] - Validated configuration for record generation
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator         (produces EmployeeRecord)
//!    ├─── seed-store             (Store trait, in-memory store)
//!    │      ├─── seed-store-postgresql
//!    │      └─── seed-store-mysql
//!    └─── seed-runner            (workers, supervisor, reporting)
//! ```

pub mod config;
pub mod record;

pub use config::{
    validate_table_name, ConfigError, DateWindow, GeneratorConfig, DEFAULT_EMAIL_DOMAIN,
};
pub use record::{EmpStatus, EmployeeRecord, Gender, DEFAULT_TABLE_NAME, EMPLOYEE_COLUMNS};

/// Identifier of a worker within one seeding run. Worker ids start at 1.
pub type WorkerId = u32;
