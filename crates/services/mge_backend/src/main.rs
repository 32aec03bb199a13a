// File: services/mge_backend/src/main.rs
use mge_common::{config_error, init_with_level, parse_level, Context, MgeError};
use mge_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), MgeError> {
    let config = Arc::new(load_config().map_err(config_error)?);
    init_with_level(parse_level(&config.logging.level));

    let app = mge_backend::app(config.clone())?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);
    info!("Backend API at {}", config.api.base_url);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;
    Ok(())
}
