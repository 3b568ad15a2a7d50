use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviesda_core::{
    load_config, validate_config, Config, HttpPageScraper, ImdbTitleSource, JsonCatalog,
    PageScraper, TitleSource,
};

use moviesda_server::api::create_router;
use moviesda_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MOVIESDA_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration; the add-on is fully functional on defaults
    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file at {:?}, using defaults", config_path);
        Config::default()
    };

    validate_config(&config).context("Configuration validation failed")?;
    info!("Catalog snapshot path: {:?}", config.catalog.path);
    info!("Fuzzy title fallback: {}", config.resolver.fuzzy_fallback);

    // Create the catalog and warm it eagerly; the load itself is
    // idempotent, so a concurrent first request would be harmless.
    let catalog = Arc::new(JsonCatalog::new(&config.catalog.path));
    info!("Catalog ready with {} records", catalog.records().len());

    // External collaborators
    let title_source: Arc<dyn TitleSource> = Arc::new(ImdbTitleSource::new(&config.resolver));
    let scraper: Arc<dyn PageScraper> = Arc::new(HttpPageScraper::new(&config.scraper));

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        catalog,
        title_source,
        scraper,
    ));

    // Create router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);
    info!("Install URL: http://{}/manifest.json", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
