use std::sync::Arc;

use ortho_api::config::{ApiConfig, LogFormat};
use ortho_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let (config, warnings) = ApiConfig::from_env();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().init(),
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "ortho-api listening");

    let app = ortho_api::app(AppState {
        config: Arc::new(config),
    });
    axum::serve(listener, app).await?;

    Ok(())
}
