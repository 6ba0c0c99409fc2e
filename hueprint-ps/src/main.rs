//! hueprint-ps (Parameter Service) - Main entry point
//!
//! Serves the onboarding → shader parameter mapping over HTTP.
//!
//! Startup order:
//! 1. Parse command-line arguments
//! 2. Load TOML bootstrap config (missing file → defaults)
//! 3. Initialize tracing (RUST_LOG overrides the configured level)
//! 4. Bind and serve until Ctrl+C / SIGTERM

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hueprint_common::config::TomlConfig;
use hueprint_ps::{build_router, AppState};
use tokio::signal;
use tracing::info;

/// Command-line arguments for hueprint-ps
#[derive(Parser, Debug)]
#[command(name = "hueprint-ps")]
#[command(about = "Parameter Service: maps onboarding answers to shader parameters")]
#[command(version)]
struct Args {
    /// Port to listen on (overrides config file)
    #[arg(short, long, env = "HUEPRINT_PS_PORT")]
    port: Option<u16>,

    /// Interface to bind (overrides config file)
    #[arg(long, env = "HUEPRINT_PS_HOST")]
    host: Option<String>,

    /// Path to TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config supplies the log level, so it loads before tracing is installed
    let config = TomlConfig::load_or_default(args.config.as_deref())
        .context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "hueprint_ps={level},hueprint_common={level},tower_http={level}",
                    level = config.logging.level
                ))
            }),
        )
        .init();

    info!(
        "Starting Hueprint Parameter Service (hueprint-ps) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let host = args.host.unwrap_or(config.host);
    let port = args.port.unwrap_or(config.port);
    let addr = format!("{}:{}", host, port);
    info!("Log level: {}", config.logging.level);

    let app = build_router(AppState::default());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("hueprint-ps listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
