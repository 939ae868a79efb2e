use std::net::SocketAddr;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wagelift_engine::api::{AppState, create_router};
use wagelift_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/wagelift";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting WageLift engine v{}", env!("CARGO_PKG_VERSION"));

    let config_dir =
        std::env::var("WAGELIFT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load configuration from {}", config_dir))?;
    info!(
        config_dir = %config_dir,
        engine_version = %config.engine().version,
        "Configuration loaded"
    );

    let port = match std::env::var("PORT") {
        Ok(value) => value
            .parse::<u16>()
            .with_context(|| format!("PORT must be a port number, got {}", value))?,
        Err(_) => DEFAULT_PORT,
    };

    let app = create_router(AppState::new(config));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
