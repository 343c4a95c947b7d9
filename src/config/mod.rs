//! Seeding configuration: TOML settings layered under CLI overrides.

pub mod args;
pub mod duration;
pub mod settings;

pub use args::SeedArgs;
pub use duration::parse_duration;
pub use settings::{SeedConfig, SeedSettings, DEFAULT_POOL_SIZE};
