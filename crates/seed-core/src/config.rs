//! Validated generator configuration.
//!
//! Everything in here is checked once at startup. Once a [`GeneratorConfig`]
//! exists, record generation cannot fail.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

/// Domain appended to generated email addresses.
pub const DEFAULT_EMAIL_DOMAIN: &str = "company.com";

/// Errors raised while validating seeding configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No job role ids to draw from.
    #[error("Configuration error: at least one job role id is required")]
    EmptyRoleSet,

    /// Window start is after window end.
    #[error("Configuration error: date window start {start} is after end {end}")]
    InvalidWindow {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Email domain is blank.
    #[error("Configuration error: email domain must not be empty")]
    EmptyEmailDomain,

    /// Worker pool would be empty.
    #[error("Configuration error: worker count must be at least 1")]
    NoWorkers,

    /// Store cannot hold one transaction per worker.
    #[error(
        "Configuration error: pool size {pool_size} cannot serve {worker_count} concurrent workers"
    )]
    PoolTooSmall { pool_size: usize, worker_count: usize },

    /// Sub-batch transactions need a positive size.
    #[error("Configuration error: transaction batch size must be at least 1")]
    ZeroBatchSize,

    /// Table names are interpolated into SQL, so only identifiers are allowed.
    #[error("Configuration error: invalid table name '{0}'")]
    InvalidTableName(String),

    /// Telemetry interval must be positive.
    #[error("Configuration error: telemetry interval must be greater than zero")]
    ZeroTelemetryInterval,
}

/// Check that `name` is a plain SQL identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn validate_table_name(name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidTableName(name.to_string()))
    }
}

/// Inclusive historical window that employment and termination dates fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl Default for DateWindow {
    /// 2020-01-01 through 2024-06-30, midnight UTC.
    fn default() -> Self {
        Self {
            start: utc_midnight(2020, 1, 1),
            end: utc_midnight(2024, 6, 30),
        }
    }
}

fn utc_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("constant calendar date is valid")
}

/// Configuration for record generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    role_ids: Vec<i32>,
    window: DateWindow,
    email_domain: String,
}

impl GeneratorConfig {
    /// Create a validated generator configuration.
    pub fn new(
        role_ids: Vec<i32>,
        window: DateWindow,
        email_domain: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if role_ids.is_empty() {
            return Err(ConfigError::EmptyRoleSet);
        }
        let email_domain = email_domain.into();
        if email_domain.trim().is_empty() {
            return Err(ConfigError::EmptyEmailDomain);
        }
        Ok(Self {
            role_ids,
            window,
            email_domain,
        })
    }

    pub fn role_ids(&self) -> &[i32] {
        &self.role_ids
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    pub fn email_domain(&self) -> &str {
        &self.email_domain
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            role_ids: vec![1, 2, 3, 4, 5],
            window: DateWindow::default(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}
