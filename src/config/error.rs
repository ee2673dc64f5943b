//! Configuration errors

use thiserror::Error;

/// Environment could not be read into [`super::AppConfig`].
#[derive(Debug, Error)]
#[error("Could not read configuration: {0}")]
pub struct ConfigError(#[from] config::ConfigError);

/// A loaded value the service cannot run with.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Bind address {0:?} is not an ip:port pair")]
    InvalidBindAddress(String),

    #[error("Request timeout of {0}s is out of range")]
    RequestTimeoutOutOfRange(u64),

    #[error("Database section present but url is empty")]
    MissingDatabaseUrl,

    #[error("Unsupported database scheme {0:?}, expected postgres")]
    UnsupportedDatabaseScheme(String),

    #[error("Pool size {0} is out of range")]
    PoolSizeOutOfRange(u32),

    #[error("Statement timeout must be positive")]
    InvalidStatementTimeout,

    #[error("Leaderboard limits must be positive")]
    InvalidLeaderboardLimit,

    #[error("Default leaderboard limit exceeds the maximum")]
    DefaultLimitExceedsMax,
}
