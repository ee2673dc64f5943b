//! Report store connection settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_POOL_SIZE: u32 = 32;

/// Connection to the hackathon database.
///
/// Sessions are opened read-only unless `read_only` is false, and every
/// statement runs under a server-side `statement_timeout`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL
    pub url: String,

    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Per-statement limit enforced by Postgres, in milliseconds
    #[serde(default = "default_statement_timeout_ms")]
    pub statement_timeout_ms: u64,

    /// Open sessions with `default_transaction_read_only`
    #[serde(default = "default_read_only")]
    pub read_only: bool,
}

impl DatabaseConfig {
    #[cfg(test)]
    pub(crate) fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: default_pool_size(),
            statement_timeout_ms: default_statement_timeout_ms(),
            read_only: default_read_only(),
        }
    }

    pub fn statement_timeout(&self) -> Duration {
        Duration::from_millis(self.statement_timeout_ms)
    }

    /// Session parameters sent in the startup packet of every connection.
    pub fn session_parameters(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("statement_timeout", self.statement_timeout_ms.to_string())];
        if self.read_only {
            params.push(("default_transaction_read_only", "on".to_string()));
        }
        params
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingDatabaseUrl);
        }
        let scheme = self.url.split("://").next().unwrap_or_default();
        if !matches!(scheme, "postgres" | "postgresql") || !self.url.contains("://") {
            return Err(ValidationError::UnsupportedDatabaseScheme(scheme.to_string()));
        }
        if self.pool_size == 0 || self.pool_size > MAX_POOL_SIZE {
            return Err(ValidationError::PoolSizeOutOfRange(self.pool_size));
        }
        if self.statement_timeout_ms == 0 {
            return Err(ValidationError::InvalidStatementTimeout);
        }
        Ok(())
    }
}

fn default_pool_size() -> u32 {
    5
}

fn default_statement_timeout_ms() -> u64 {
    10_000
}

fn default_read_only() -> bool {
    true
}
