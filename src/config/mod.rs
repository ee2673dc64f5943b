//! Environment-driven configuration.
//!
//! Every value comes from `HACKATHON_ANALYTICS__<SECTION>__<KEY>` variables
//! (a `.env` file is read first when present). All sections have defaults
//! except `database`: leave `HACKATHON_ANALYTICS__DATABASE__URL` unset and
//! the service starts with every report answering "not configured".
//!
//! ```no_run
//! use hackathon_analytics::config::AppConfig;
//!
//! let config = AppConfig::load().expect("configuration");
//! config.validate().expect("valid configuration");
//! assert!(config.server.bind_addr().is_ok());
//! ```

mod analytics;
mod database;
mod error;
mod server;

pub use analytics::AnalyticsConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "HACKATHON_ANALYTICS";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// `None` runs the service without a report store.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl AppConfig {
    /// Reads `.env` if present, then the prefixed environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.analytics.validate()?;
        match &self.database {
            Some(database) => database.validate(),
            None => Ok(()),
        }
    }
}
