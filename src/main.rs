//! Hackathon analytics service binary.
//!
//! Loads configuration, wires the reader into the HTTP adapter and serves
//! report views until interrupted.

use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hackathon_analytics::adapters::{
    analytics_routes, AnalyticsAppState, PostgresHackathonReader, UnconfiguredReader,
};
use hackathon_analytics::config::{
    AppConfig, ConfigError, DatabaseConfig, LogFormat, ValidationError,
};
use hackathon_analytics::ports::HackathonReader;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database pool setup failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let reader: Arc<dyn HackathonReader> = match &config.database {
        Some(database) => Arc::new(PostgresHackathonReader::new(connect(database)?)),
        None => {
            tracing::warn!("No database configured; every report will return 503");
            Arc::new(UnconfiguredReader)
        }
    };

    let state = AnalyticsAppState::new(reader).with_limits(
        config.analytics.default_leaderboard_limit,
        config.analytics.max_leaderboard_limit,
    );

    let app = analytics_routes(state)
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match config.server.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Builds the pool lazily; an unreachable database surfaces as query errors.
fn connect(database: &DatabaseConfig) -> Result<sqlx::PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(&database.url)?
        .options(database.session_parameters());

    Ok(PgPoolOptions::new()
        .max_connections(database.pool_size)
        .acquire_timeout(database.statement_timeout())
        .connect_lazy_with(options))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
