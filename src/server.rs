//! Process bootstrap: configuration, tracing, and the HTTP listener.

use thiserror::Error;
use tracing::info;

use crate::adapters::http::{app_router, AnalysisHandlers};
use crate::config::{AppConfig, ConfigError};
use crate::telemetry::{self, TelemetryError};

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads configuration, installs tracing, and serves until shutdown.
pub async fn run() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    telemetry::init(&config.server)?;

    let handlers = AnalysisHandlers::from_config(&config.analysis);
    let app = app_router(handlers, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        environment = ?config.server.environment,
        %addr,
        normalize_weights = config.analysis.normalize_weights,
        sensitivity_method = ?config.analysis.sensitivity_method,
        "decision support service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
