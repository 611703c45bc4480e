// honyaku - structured LLM translation service
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use honyaku::cli::Args;
use honyaku::config::AppConfig;
use honyaku::server::create_router;
use honyaku::translation::TranslationRequestProcessor;
use honyaku::upstream::ClientConfig;
use honyaku::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting honyaku v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Build the translation processor
    let client_config = ClientConfig::from_settings(&config.translator)?
        .with_log_sanitizing(config.logging.sanitize_tokens);
    info!(
        "Using model {} at {}",
        client_config.model(),
        client_config.api_endpoint()
    );
    let processor = TranslationRequestProcessor::new(client_config)?;

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), processor);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
