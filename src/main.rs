// fridge-chef - Fridge photo to recipe suggestions gateway backed by Gemini
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use fridge_chef::cli::Args;
use fridge_chef::config::AppConfig;
use fridge_chef::gemini::GeminiClient;
use fridge_chef::server::create_router;
use fridge_chef::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting fridge-chef v{}", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    // Phase 3: Start the runtime sized from config
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<()> {
    // Phase 4: Build the Gemini client
    let gemini_client = GeminiClient::new(&config.gemini, config.gemini.api_key.clone())?;
    info!("Using Gemini model {}", gemini_client.model());

    // Phase 5: Build and start HTTP server
    let app = create_router(&config.server, Arc::new(gemini_client))?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Fridge Chef API starting on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
