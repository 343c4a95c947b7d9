//! PostgreSQL store for employee-seed.
//!
//! Each transaction runs on its own connection. The number of connections
//! open at once is capped by the store's pool size.

pub mod error;
pub mod insert;
pub mod store;

pub use error::PostgreSQLStoreError;
pub use store::PostgreSQLStore;
