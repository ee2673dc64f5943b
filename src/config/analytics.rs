//! Report configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Leaderboard sizing for report views.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Top-list size when a request gives no limit
    #[serde(default = "default_leaderboard_limit")]
    pub default_leaderboard_limit: i64,

    /// Requested limits above this are capped at the HTTP boundary
    #[serde(default = "default_max_leaderboard_limit")]
    pub max_leaderboard_limit: i64,
}

impl AnalyticsConfig {
    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_leaderboard_limit <= 0 || self.max_leaderboard_limit <= 0 {
            return Err(ValidationError::InvalidLeaderboardLimit);
        }
        if self.default_leaderboard_limit > self.max_leaderboard_limit {
            return Err(ValidationError::DefaultLimitExceedsMax);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            default_leaderboard_limit: default_leaderboard_limit(),
            max_leaderboard_limit: default_max_leaderboard_limit(),
        }
    }
}

fn default_leaderboard_limit() -> i64 {
    20
}

fn default_max_leaderboard_limit() -> i64 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.default_leaderboard_limit, 20);
        assert_eq!(config.max_leaderboard_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_positive() {
        let config = AnalyticsConfig {
            default_leaderboard_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_default_above_max() {
        let config = AnalyticsConfig {
            default_leaderboard_limit: 50,
            max_leaderboard_limit: 10,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::DefaultLimitExceedsMax)
        ));
    }
}
