//! MySQL store for employee-seed.

pub mod error;
pub mod insert;
pub mod store;

pub use error::MySQLStoreError;
pub use store::MySQLStore;
