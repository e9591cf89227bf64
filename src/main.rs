//! Birdwatch Detection Ingestion Service
//!
//! Receives detection reports from the IoT message bridge, validates
//! them, and forwards each valid report once to the managed data API.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};

use api::{router, AppState};
use datastore::{GraphQlStore, StoreConfig};
use telemetry::{health, init_tracing_from_env};

/// Application configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct Config {
    #[serde(default = "default_host")]
    host: String,
    #[serde(default = "default_port")]
    port: u16,

    #[serde(default)]
    store: StoreConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store: StoreConfig::default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing_from_env();

    info!("Starting Birdwatch ingestion service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_config()?;

    info!(
        endpoint = %config.store.endpoint,
        api_key = if config.store.api_key.is_some() { "set" } else { "none" },
        "Loaded data API config"
    );

    // Initialize the data API client
    let store = Arc::new(
        GraphQlStore::new(config.store.clone()).context("Failed to create data API client")?,
    );

    // Check health and update status
    check_health(&store).await;

    // Create application state
    let state = AppState::new(store.clone());

    // Create router
    let app = router(state);

    // Start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid server address")?;

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    let counters = telemetry::metrics().snapshot();
    info!(
        reports_received = counters.reports_received,
        reports_forwarded = counters.reports_forwarded,
        reports_rejected = counters.reports_rejected,
        "Shutdown complete"
    );
    Ok(())
}

/// Load configuration from files and environment.
fn load_config() -> Result<Config> {
    let config = config::Config::builder()
        // Start with defaults
        .add_source(config::Config::try_from(&Config::default())?)
        // Load from config file if exists
        .add_source(
            config::File::with_name("config/default")
                .required(false)
                .format(config::FileFormat::Toml),
        )
        // Override with environment variables
        .add_source(
            config::Environment::default()
                .separator("__")
                .prefix("BIRDWATCH")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    let mut config: Config = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    // Manual overrides for nested store config from environment
    if let Ok(endpoint) = std::env::var("BIRDWATCH_STORE_ENDPOINT") {
        config.store.endpoint = endpoint;
    }
    if let Ok(api_key) = std::env::var("BIRDWATCH_STORE_API_KEY") {
        config.store.api_key = Some(api_key);
    }

    Ok(config)
}

/// Check data API health on startup.
async fn check_health(store: &GraphQlStore) {
    if datastore::health::check_connection(store).await {
        health().store.set_healthy();
        info!("Data API connection: healthy");
    } else {
        health().store.set_unhealthy("Connection failed");
        error!("Data API connection: unhealthy");
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            info!("Received terminate signal");
        }
    }
}
