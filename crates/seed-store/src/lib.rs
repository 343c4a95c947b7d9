//! Transactional store abstraction for employee-seed.
//!
//! Workers never talk to a database directly. They ask a [`Store`] for a
//! [`StoreTransaction`], insert records into it one at a time and then commit
//! or roll back. Concrete backends live in `seed-store-postgresql` and
//! `seed-store-mysql`; [`MemoryStore`] backs dry runs and tests.

pub mod error;
pub mod memory;
pub mod store;

pub use error::WriteError;
pub use memory::{MemoryStore, StoredEmployee};
pub use store::{Store, StoreTransaction};
