//! Map server for the points-of-interest API.
//!
//! The `poimap serve` command loads the embedded manifest, builds an HTTP
//! health probe for the tile service, and serves the map page and JSON API
//! with axum until interrupted.
#![forbid(unsafe_code)]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use poimap_data::{HttpTileServerProbe, embedded_store};
use tokio::net::TcpListener;
use tracing::{info, warn};

mod config;
mod error;
pub mod http;
pub mod telemetry;

pub use config::{DEFAULT_BIND, DEFAULT_TILESERVER_URL, ServeArgs, ServeConfig};
pub use error::ServerError;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "poimap",
    about = "Serve a map of points of interest backed by an external tile service",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the map page and JSON API.
    Serve(ServeArgs),
}

/// Parse `args` (including the binary name) into a [`Cli`].
///
/// # Errors
/// Returns [`ServerError::ArgumentParsing`] for invalid arguments and for
/// `--help`/`--version` requests, which clap reports as errors.
pub fn parse_cli<I, T>(args: I) -> Result<Cli, ServerError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(ServerError::ArgumentParsing)
}

/// Dispatch a parsed command line.
///
/// # Errors
/// Returns [`ServerError`] when configuration is invalid or the server fails
/// to start or stops abnormally.
pub async fn run(cli: Cli) -> Result<(), ServerError> {
    match cli.command {
        Command::Serve(args) => serve(args.into_config()?).await,
    }
}

/// Serve the API with `config` until Ctrl-C.
///
/// # Errors
/// Returns [`ServerError`] when the manifest or probe cannot be built, the
/// listen socket cannot be bound, or the server stops with an I/O error.
pub async fn serve(config: ServeConfig) -> Result<(), ServerError> {
    let store = Arc::new(embedded_store()?);
    let probe = HttpTileServerProbe::new(config.tileserver.internal.clone())?;
    info!(
        pois = store.len(),
        tileserver_internal = %config.tileserver.internal,
        tileserver_public = %config.tileserver.public,
        health_url = probe.health_url(),
        "loaded points of interest"
    );
    let state = http::AppState::new(store, Arc::new(probe), config.tileserver);
    let router = http::create_router(state);

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind,
            source,
        })?;
    info!(addr = %config.bind, "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(err) => {
            warn!(error = %err, "cannot listen for Ctrl-C; running until killed");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests;
